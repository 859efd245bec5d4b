mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a SQL statement
    QuerySql(QuerySql),
}

impl Operation {
    pub fn as_query_sql(&self) -> &QuerySql {
        match self {
            Operation::QuerySql(op) => op,
        }
    }
}
