use super::{OnConflict, ValueRecord};

/// A single-row `INSERT`.
///
/// `columns` and `values` line up one to one. An empty column list inserts a
/// row made only of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: ValueRecord,

    /// What to do when the row collides with an existing key
    pub on_conflict: Option<OnConflict>,

    /// Columns to return from the inserted (or updated) row
    pub returning: Option<Vec<String>>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            values: ValueRecord::default(),
            on_conflict: None,
            returning: None,
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<super::Value>) {
        self.columns.push(column.into());
        self.values.fields.push(value.into());
    }
}
