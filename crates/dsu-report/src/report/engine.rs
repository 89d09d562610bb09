use std::collections::HashSet;

use super::rules::{ClassificationRules, ExclusionRules};
use super::table::{combine, duration_or_zero, ActivityRow, ActivityTable};
use super::views::{DialsRowView, DsuSummary, ReportTotals};

/// The DSU report pipeline: combine -> filter -> classify -> aggregate.
/// Rule sets are injected data so tests can parameterize them.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    exclusions: ExclusionRules,
    classification: ClassificationRules,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReportEngine {
    pub fn standard() -> Self {
        Self::with_rules(ExclusionRules::standard(), ClassificationRules::standard())
    }

    pub fn with_rules(exclusions: ExclusionRules, classification: ClassificationRules) -> Self {
        Self {
            exclusions,
            classification,
        }
    }

    /// Runs the whole batch. An empty combined table reports as `NoData`
    /// rather than producing a zero-filled summary.
    pub fn build(&self, tables: Vec<ActivityTable>) -> ReportOutcome {
        let combined = combine(tables);
        if combined.is_empty() {
            return ReportOutcome::NoData;
        }

        let combined_rows = combined.len();
        let filtered = self.filter(combined);
        let dials = self.dials_basis(&filtered);
        let summary = self.summarize(&filtered, &dials);

        ReportOutcome::Ready(DsuReport {
            combined_rows,
            filtered,
            dials,
            summary,
        })
    }

    pub fn filter(&self, table: ActivityTable) -> ActivityTable {
        let ActivityTable { columns, rows } = table;
        let rows = rows
            .into_iter()
            .filter(|row| !self.is_excluded(row))
            .collect();
        ActivityTable { columns, rows }
    }

    pub fn is_excluded(&self, row: &ActivityRow) -> bool {
        self.exclusions.excludes_status(row.status.as_deref())
            || self.exclusions.excludes_remark_by(row.remark_by.as_deref())
            || self.exclusions.excludes_remark(row.remark.as_deref())
    }

    pub fn is_system_follow_up(&self, row: &ActivityRow) -> bool {
        self.classification
            .is_system_follow_up(row.remark_type.as_deref(), row.remark_by.as_deref())
    }

    pub fn is_predictive_outgoing(&self, row: &ActivityRow) -> bool {
        self.classification.is_dial(row.remark_type.as_deref())
    }

    /// Rows qualifying for either subset; a row satisfying both predicates
    /// appears exactly once.
    pub fn dials_basis(&self, filtered: &ActivityTable) -> ActivityTable {
        let rows = filtered
            .rows
            .iter()
            .filter(|row| self.is_system_follow_up(row) || self.is_predictive_outgoing(row))
            .cloned()
            .collect();
        ActivityTable {
            columns: filtered.columns.clone(),
            rows,
        }
    }

    fn summarize(&self, filtered: &ActivityTable, dials: &ActivityTable) -> DsuSummary {
        let mut agents: HashSet<&str> = HashSet::new();
        for row in &filtered.rows {
            if duration_or_zero(row.call_duration) > 0.0 {
                if let Some(agent) = row.remark_by.as_deref() {
                    agents.insert(agent);
                }
            }
        }

        // Concatenation of the two subsets; distinctness makes the overlap
        // and the within-subset duplicates immaterial.
        let union = filtered
            .rows
            .iter()
            .filter(|row| self.is_system_follow_up(row))
            .chain(
                filtered
                    .rows
                    .iter()
                    .filter(|row| self.is_predictive_outgoing(row)),
            );

        let mut accounts: HashSet<&str> = HashSet::new();
        let mut connected: HashSet<&str> = HashSet::new();
        for row in union {
            if let Some(account) = row.account_no.as_deref() {
                accounts.insert(account);
                if duration_or_zero(row.talk_time_duration) > 0.0 {
                    connected.insert(account);
                }
            }
        }

        DsuSummary {
            agent: agents.len(),
            accounts: accounts.len(),
            dials: dials.len(),
            conn_unique: connected.len(),
        }
    }
}

#[derive(Debug)]
pub enum ReportOutcome {
    /// Zero tables, or nothing but headers, across the whole batch.
    NoData,
    Ready(DsuReport),
}

/// Everything derived from one upload batch. Immutable once built.
#[derive(Debug)]
pub struct DsuReport {
    pub combined_rows: usize,
    pub filtered: ActivityTable,
    pub dials: ActivityTable,
    pub summary: DsuSummary,
}

impl DsuReport {
    pub fn totals(&self) -> ReportTotals {
        ReportTotals {
            combined_rows: self.combined_rows,
            filtered_rows: self.filtered.len(),
            dials_rows: self.dials.len(),
        }
    }

    pub fn dials_rows(&self) -> Vec<DialsRowView> {
        self.dials.rows.iter().map(DialsRowView::from_row).collect()
    }
}
