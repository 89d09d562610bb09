use csv::StringRecord;
use std::io::Read;

use super::ActivityImportError;
use crate::report::table::{ActivityRow, ActivityTable};

pub(crate) const STATUS: &str = "Status";
pub(crate) const REMARK_BY: &str = "Remark By";
pub(crate) const REMARK: &str = "Remark";
pub(crate) const REMARK_TYPE: &str = "Remark Type";
pub(crate) const CALL_DURATION: &str = "Call Duration";
pub(crate) const TALK_TIME_DURATION: &str = "Talk Time Duration";
pub(crate) const ACCOUNT_NO: &str = "Account No.";

/// Columns every export must carry, matched by exact name. Anything else
/// passes through untouched.
pub const REQUIRED_COLUMNS: &[&str] = &[
    STATUS,
    REMARK_BY,
    REMARK,
    REMARK_TYPE,
    CALL_DURATION,
    TALK_TIME_DURATION,
    ACCOUNT_NO,
];

struct ColumnLayout {
    status: usize,
    remark_by: usize,
    remark: usize,
    remark_type: usize,
    call_duration: usize,
    talk_time_duration: usize,
    account_no: usize,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self, ActivityImportError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(ActivityImportError::MissingColumn { column })
        };

        Ok(Self {
            status: find(STATUS)?,
            remark_by: find(REMARK_BY)?,
            remark: find(REMARK)?,
            remark_type: find(REMARK_TYPE)?,
            call_duration: find(CALL_DURATION)?,
            talk_time_duration: find(TALK_TIME_DURATION)?,
            account_no: find(ACCOUNT_NO)?,
        })
    }
}

pub(crate) fn parse_table<R: Read>(reader: R) -> Result<ActivityTable, ActivityImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let layout = ColumnLayout::resolve(&headers)?;
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(parse_row(&record, &layout, columns.len(), line)?);
    }

    Ok(ActivityTable { columns, rows })
}

fn parse_row(
    record: &StringRecord,
    layout: &ColumnLayout,
    width: usize,
    line: u64,
) -> Result<ActivityRow, ActivityImportError> {
    let mut values = vec![String::new(); width];
    for (idx, value) in record.iter().enumerate().take(width) {
        values[idx] = value.to_string();
    }

    Ok(ActivityRow {
        status: text_cell(record.get(layout.status)),
        remark_by: text_cell(record.get(layout.remark_by)),
        remark: text_cell(record.get(layout.remark)),
        remark_type: text_cell(record.get(layout.remark_type)),
        call_duration: duration_cell(record.get(layout.call_duration), CALL_DURATION, line)?,
        talk_time_duration: duration_cell(
            record.get(layout.talk_time_duration),
            TALK_TIME_DURATION,
            line,
        )?,
        account_no: text_cell(record.get(layout.account_no)),
        values,
    })
}

fn text_cell(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn duration_cell(
    value: Option<&str>,
    column: &'static str,
    line: u64,
) -> Result<Option<f64>, ActivityImportError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ActivityImportError::InvalidDuration {
                column,
                line,
                value: raw.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.";

    #[test]
    fn parses_typed_fields_and_keeps_passthrough_cells() {
        let csv = format!(
            "{HEADER},Campaign\nOpen,AGENT1,Promise to pay,Predictive,45,32.5,ACCT-1,ALPHA\n"
        );
        let table = parse_table(Cursor::new(csv)).expect("table parses");

        assert_eq!(table.columns.len(), 8);
        let row = &table.rows[0];
        assert_eq!(row.status.as_deref(), Some("Open"));
        assert_eq!(row.remark_type.as_deref(), Some("Predictive"));
        assert_eq!(row.call_duration, Some(45.0));
        assert_eq!(row.talk_time_duration, Some(32.5));
        assert_eq!(row.account_no.as_deref(), Some("ACCT-1"));
        assert_eq!(row.values[7], "ALPHA");
    }

    #[test]
    fn empty_cells_normalize_to_none() {
        let csv = format!("{HEADER}\n,, ,  ,,,\n");
        let table = parse_table(Cursor::new(csv)).expect("table parses");

        let row = &table.rows[0];
        assert!(row.status.is_none());
        assert!(row.remark_by.is_none());
        assert!(row.remark.is_none());
        assert!(row.remark_type.is_none());
        assert!(row.call_duration.is_none());
        assert!(row.talk_time_duration.is_none());
        assert!(row.account_no.is_none());
    }

    #[test]
    fn missing_required_column_names_the_column() {
        let csv = "Status,Remark By,Remark,Remark Type,Call Duration,Account No.\n";
        let error = parse_table(Cursor::new(csv)).expect_err("schema error expected");
        match error {
            ActivityImportError::MissingColumn { column } => {
                assert_eq!(column, TALK_TIME_DURATION);
            }
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_duration_reports_column_and_line() {
        let csv = format!("{HEADER}\nOpen,AGENT1,Called,Predictive,soon,0,ACCT-1\n");
        let error = parse_table(Cursor::new(csv)).expect_err("duration error expected");
        match error {
            ActivityImportError::InvalidDuration {
                column,
                line,
                value,
            } => {
                assert_eq!(column, CALL_DURATION);
                assert_eq!(line, 2);
                assert_eq!(value, "soon");
            }
            other => panic!("expected duration error, got {other:?}"),
        }
    }
}
