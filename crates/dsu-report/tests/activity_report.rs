use std::io::Cursor;

use dsu_report::report::ingest::ActivityCsvImporter;
use dsu_report::report::{ReportEngine, ReportOutcome};

const HEADER: &str =
    "Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.";

fn build(files: &[String]) -> ReportOutcome {
    let tables = ActivityCsvImporter::from_readers(
        files.iter().map(|file| Cursor::new(file.as_bytes())),
    )
    .expect("batch parses");
    ReportEngine::standard().build(tables)
}

#[test]
fn single_predictive_row_yields_ones_across_the_board() {
    let populated = format!("{HEADER}\nOpen,AGENT1,Called,Predictive,30,15,A100\n");
    let header_only = format!("{HEADER}\n");

    let report = match build(&[populated, header_only]) {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoData => panic!("combined batch has one row"),
    };

    assert_eq!(report.combined_rows, 1);
    assert_eq!(report.filtered.len(), 1);
    assert_eq!(report.summary.agent, 1);
    assert_eq!(report.summary.accounts, 1);
    assert_eq!(report.summary.dials, 1);
    assert_eq!(report.summary.conn_unique, 1);
}

#[test]
fn header_only_batch_reports_no_data() {
    let header_only = format!("{HEADER}\n");
    assert!(matches!(
        build(&[header_only]),
        ReportOutcome::NoData
    ));
}

#[test]
fn empty_batch_reports_no_data_not_a_zero_summary() {
    assert!(matches!(build(&[]), ReportOutcome::NoData));
}

#[test]
fn excluded_statuses_match_case_insensitively() {
    let file = format!(
        "{HEADER}\n\
         locked,AGENT1,Called,Predictive,30,15,A100\n\
         Abort,AGENT2,Called,Predictive,30,15,A101\n\
         Open,AGENT3,Called,Predictive,30,15,A102\n"
    );

    let report = match build(&[file]) {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoData => panic!("batch has rows"),
    };

    assert_eq!(report.combined_rows, 3);
    assert_eq!(report.filtered.len(), 1);
    assert_eq!(report.summary.agent, 1);
    assert_eq!(report.summary.dials, 1);
}

#[test]
fn full_export_fixture_produces_the_expected_summary() {
    let data = include_bytes!("../Dialer_Activity.csv");
    let table = ActivityCsvImporter::from_reader(&data[..]).expect("fixture parses");

    let report = match ReportEngine::standard().build(vec![table]) {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoData => panic!("fixture has rows"),
    };

    let totals = report.totals();
    assert_eq!(totals.combined_rows, 15);
    assert_eq!(totals.filtered_rows, 9);
    assert_eq!(totals.dials_rows, 8);

    assert_eq!(report.summary.agent, 2);
    assert_eq!(report.summary.accounts, 6);
    assert_eq!(report.summary.dials, 8);
    assert_eq!(report.summary.conn_unique, 2);
    assert!(report.summary.conn_unique <= report.summary.accounts);

    let views = report.dials_rows();
    assert_eq!(views.len(), 8);
    assert!(views
        .iter()
        .any(|view| view.account_no.as_deref() == Some("ACCT-1012")));
}

#[test]
fn batches_concatenate_before_aggregation() {
    let first = format!(
        "{HEADER}\n\
         Open,System,Morning sweep,Follow Up,0,0,A100\n"
    );
    let second = format!(
        "{HEADER}\n\
         Open,AGENT1,Called back,Outgoing,40,25,A100\n\
         Open,AGENT2,Called,Predictive,20,0,A200\n"
    );

    let report = match build(&[first, second]) {
        ReportOutcome::Ready(report) => report,
        ReportOutcome::NoData => panic!("batch has rows"),
    };

    assert_eq!(report.combined_rows, 3);
    // one follow-up row plus two dial rows, A100 appearing in both subsets
    assert_eq!(report.summary.dials, 3);
    assert_eq!(report.summary.accounts, 2);
    assert_eq!(report.summary.conn_unique, 1);
    assert_eq!(report.summary.agent, 2);
}
