mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use dsu_report::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
