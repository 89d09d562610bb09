use std::collections::HashMap;

/// One activity record. Typed fields drive filtering and aggregation;
/// `values` keeps the full original cells so passthrough columns survive
/// into the raw export.
#[derive(Debug, Clone, Default)]
pub struct ActivityRow {
    pub status: Option<String>,
    pub remark_by: Option<String>,
    pub remark: Option<String>,
    pub remark_type: Option<String>,
    pub call_duration: Option<f64>,
    pub talk_time_duration: Option<f64>,
    pub account_no: Option<String>,
    pub values: Vec<String>,
}

/// Ordered rows sharing one column list. `values` in each row is aligned
/// with `columns`.
#[derive(Debug, Clone, Default)]
pub struct ActivityTable {
    pub columns: Vec<String>,
    pub rows: Vec<ActivityRow>,
}

impl ActivityTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Named null-as-zero coercion so the duration thresholds stay total.
pub fn duration_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Order-preserving concatenation of a whole upload batch. Columns are the
/// union of the inputs' columns in first-seen order; rows coming from a
/// table without a given column get an empty cell there. No deduplication.
pub fn combine(tables: Vec<ActivityTable>) -> ActivityTable {
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for table in &tables {
        for name in &table.columns {
            if !index.contains_key(name) {
                index.insert(name.clone(), columns.len());
                columns.push(name.clone());
            }
        }
    }

    let mut rows = Vec::new();
    for table in tables {
        let mapping: Vec<usize> = table.columns.iter().map(|name| index[name]).collect();
        for mut row in table.rows {
            let mut values = vec![String::new(); columns.len()];
            for (slot, value) in mapping.iter().zip(row.values.drain(..)) {
                values[*slot] = value;
            }
            row.values = values;
            rows.push(row);
        }
    }

    ActivityTable { columns, rows }
}
