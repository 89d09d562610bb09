use serde::Serialize;

use super::table::ActivityRow;

/// The one-row summary table: Agent, Accounts, Dials, Conn Unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DsuSummary {
    pub agent: usize,
    pub accounts: usize,
    pub dials: usize,
    pub conn_unique: usize,
}

/// Row counts across the pipeline stages, for display next to the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub combined_rows: usize,
    pub filtered_rows: usize,
    pub dials_rows: usize,
}

/// Inspection view over the dials basis table: the three columns reviewers
/// actually check when a total looks off.
#[derive(Debug, Clone, Serialize)]
pub struct DialsRowView {
    pub remark_type: Option<String>,
    pub remark_by: Option<String>,
    pub account_no: Option<String>,
}

impl DialsRowView {
    pub(crate) fn from_row(row: &ActivityRow) -> Self {
        Self {
            remark_type: row.remark_type.clone(),
            remark_by: row.remark_by.clone(),
            account_no: row.account_no.clone(),
        }
    }
}
