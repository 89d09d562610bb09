use crate::demo::{run_demo, run_dsu_report, DemoArgs, DsuReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dsu_report::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DSU Report Service",
    about = "Run and demonstrate the call-center DSU report service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with DSU activity reports
    Dsu {
        #[command(subcommand)]
        command: DsuCommand,
    },
    /// Run the report pipeline over a built-in sample export
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DsuCommand {
    /// Build the DSU summary from one or more activity exports
    Report(DsuReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dsu {
            command: DsuCommand::Report(args),
        } => run_dsu_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
