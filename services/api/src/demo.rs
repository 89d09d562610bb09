use chrono::Local;
use clap::Args;
use dsu_report::error::AppError;
use dsu_report::report::export::{raw_csv, summary_csv};
use dsu_report::report::ingest::ActivityCsvImporter;
use dsu_report::report::{DsuReport, ReportEngine, ReportOutcome};
use std::io::Cursor;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct DsuReportArgs {
    /// Activity CSV export to include in the batch (repeatable)
    #[arg(long = "file", required = true)]
    pub(crate) files: Vec<PathBuf>,
    /// Print the dials inspection rows (Remark Type | Remark By | Account No.)
    #[arg(long)]
    pub(crate) list_dials: bool,
    /// Write the raw filtered dataset CSV to this path
    #[arg(long)]
    pub(crate) raw_out: Option<PathBuf>,
    /// Write the summary table CSV to this path
    #[arg(long)]
    pub(crate) summary_out: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the dials inspection rows for the sample batch
    #[arg(long)]
    pub(crate) list_dials: bool,
}

pub(crate) fn run_dsu_report(args: DsuReportArgs) -> Result<(), AppError> {
    let DsuReportArgs {
        files,
        list_dials,
        raw_out,
        summary_out,
    } = args;

    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        tables.push(ActivityCsvImporter::from_path(path)?);
    }

    let report = match ReportEngine::standard().build(tables) {
        ReportOutcome::NoData => {
            println!("No data was loaded from the provided files.");
            return Ok(());
        }
        ReportOutcome::Ready(report) => report,
    };

    render_dsu_report(&report, files.len(), list_dials);

    if let Some(path) = raw_out {
        std::fs::write(&path, raw_csv(&report.dials)?)?;
        println!("\nRaw filtered dataset written to {}", path.display());
    }
    if let Some(path) = summary_out {
        std::fs::write(&path, summary_csv(&report.summary)?)?;
        println!("Summary table written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("DSU report demo (built-in sample export)");

    let table = ActivityCsvImporter::from_reader(Cursor::new(SAMPLE_EXPORT))?;
    info!(rows = table.len(), "sample export parsed");

    match ReportEngine::standard().build(vec![table]) {
        ReportOutcome::NoData => println!("No data was loaded from the sample export."),
        ReportOutcome::Ready(report) => render_dsu_report(&report, 1, args.list_dials),
    }

    Ok(())
}

pub(crate) fn render_dsu_report(report: &DsuReport, file_count: usize, list_dials: bool) {
    let today = Local::now().date_naive();
    let totals = report.totals();

    println!("DSU activity report (generated {today})");
    println!(
        "Input: {} file(s) | {} combined rows | {} after exclusions",
        file_count, totals.combined_rows, totals.filtered_rows
    );

    println!("\nSummary");
    println!("- Agent: {}", report.summary.agent);
    println!("- Accounts: {}", report.summary.accounts);
    println!("- Dials: {}", report.summary.dials);
    println!("- Conn Unique: {}", report.summary.conn_unique);

    if list_dials {
        if report.dials.is_empty() {
            println!("\nDials rows: none");
        } else {
            println!("\nDials rows (Remark Type | Remark By | Account No.)");
            for row in report.dials_rows() {
                println!(
                    "- {} | {} | {}",
                    row.remark_type.as_deref().unwrap_or("-"),
                    row.remark_by.as_deref().unwrap_or("-"),
                    row.account_no.as_deref().unwrap_or("-"),
                );
            }
        }
    }
}

const SAMPLE_EXPORT: &str = "\
Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.,Date
Open,MJSANTOS,Promise to pay,Predictive,45,32,ACCT-1001,2025-07-01
Open,System,Auto follow up,Follow Up,0,0,ACCT-1002,2025-07-01
LOCKED,RLREYES,Account locked,Manual,15,10,ACCT-1003,2025-07-01
Open,SPMADRID,Supervisor note,Manual,0,0,ACCT-1004,2025-07-01
Open,RLREYES,Left voicemail,Outgoing Manual,38,0,ACCT-1001,2025-07-01
Open,MJSANTOS,No answer,Predictive,12,0,ACCT-1002,2025-07-02
";
