use std::io::Cursor;

use dsu_report::report::export::{raw_csv, summary_csv};
use dsu_report::report::ingest::ActivityCsvImporter;
use dsu_report::report::{ReportEngine, ReportOutcome};

const EXPORT: &str = "\
Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.,Campaign
Open,AGENT1,Called,Predictive,30,15,A100,ALPHA
Open,System,Auto retry,Follow Up,0,0,A200,ALPHA
Open,AGENT2,Inbound note,Inbound,20,12,A300,BRAVO
";

fn report() -> dsu_report::report::DsuReport {
    let table = ActivityCsvImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");
    match ReportEngine::standard().build(vec![table]) {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoData => panic!("export has rows"),
    }
}

#[test]
fn raw_export_carries_the_full_header_and_only_dials_rows() {
    let report = report();
    let csv = raw_csv(&report.dials).expect("raw export serializes");

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.,Campaign")
    );
    // the inbound row is not part of the dials basis
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|line| !line.contains("Inbound")));
    assert!(rows.iter().any(|line| line.ends_with("ALPHA")));
}

#[test]
fn summary_export_is_one_header_and_one_integer_row() {
    let report = report();
    let csv = summary_csv(&report.summary).expect("summary serializes");
    assert_eq!(csv, "Agent,Accounts,Dials,Conn Unique\n2,2,2,1\n");
}
