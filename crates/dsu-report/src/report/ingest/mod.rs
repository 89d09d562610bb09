mod parser;

use std::io::Read;
use std::path::Path;

use crate::report::table::ActivityTable;

pub use parser::REQUIRED_COLUMNS;

#[derive(Debug, thiserror::Error)]
pub enum ActivityImportError {
    #[error("failed to read activity export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid activity CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("activity export is missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("invalid {column} value '{value}' on line {line}: expected seconds")]
    InvalidDuration {
        column: &'static str,
        line: u64,
        value: String,
    },
}

/// Reads call-center activity exports into `ActivityTable`s. Every failure
/// aborts the whole batch; no partial table is ever returned.
pub struct ActivityCsvImporter;

impl ActivityCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ActivityTable, ActivityImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ActivityTable, ActivityImportError> {
        parser::parse_table(reader)
    }

    pub fn from_readers<R, I>(readers: I) -> Result<Vec<ActivityTable>, ActivityImportError>
    where
        R: Read,
        I: IntoIterator<Item = R>,
    {
        readers.into_iter().map(Self::from_reader).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "Status,Remark By,Remark,Remark Type,Call Duration,Talk Time Duration,Account No.";

    #[test]
    fn importer_reads_a_single_export() {
        let csv = format!("{HEADER}\nOpen,AGENT1,Called,Predictive,30,15,A100\n");
        let table = ActivityCsvImporter::from_reader(Cursor::new(csv)).expect("export parses");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].remark_by.as_deref(), Some("AGENT1"));
    }

    #[test]
    fn importer_rejects_batch_on_first_bad_file() {
        let good = format!("{HEADER}\nOpen,AGENT1,Called,Predictive,30,15,A100\n");
        let bad = "Status,Remark\nOpen,Called\n".to_string();
        let error = ActivityCsvImporter::from_readers(
            [good, bad].iter().map(|file| Cursor::new(file.as_bytes())),
        )
        .expect_err("schema error surfaces");
        match error {
            ActivityImportError::MissingColumn { column } => assert_eq!(column, "Remark By"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = ActivityCsvImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            ActivityImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
