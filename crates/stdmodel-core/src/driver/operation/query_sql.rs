use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL statement to execute
    pub stmt: stmt::Statement,

    /// The types of the returned columns. `None` when the statement returns a
    /// row count.
    pub ret: Option<Vec<stmt::Type>>,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
