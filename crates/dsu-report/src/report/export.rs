use super::table::ActivityTable;
use super::views::DsuSummary;

/// Download name for the raw filtered dataset.
pub const RAW_EXPORT_FILENAME: &str = "dsu_raw_data.csv";
/// Download name for the one-row summary table.
pub const SUMMARY_EXPORT_FILENAME: &str = "dsu_summary.csv";

const SUMMARY_HEADERS: [&str; 4] = ["Agent", "Accounts", "Dials", "Conn Unique"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize CSV artifact: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV artifact was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a table with its full header and every passthrough column.
/// No index column is added.
pub fn raw_csv(table: &ActivityTable) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(&row.values)?;
    }
    finish(writer)
}

/// Serializes the summary as one header plus one integer row.
pub fn summary_csv(summary: &DsuSummary) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SUMMARY_HEADERS)?;
    writer.write_record([
        summary.agent.to_string(),
        summary.accounts.to_string(),
        summary.dials.to_string(),
        summary.conn_unique.to_string(),
    ])?;
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let buffer = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8(buffer)?)
}
