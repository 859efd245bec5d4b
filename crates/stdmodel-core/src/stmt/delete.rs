use super::Expr;

/// `DELETE FROM <table> WHERE <filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Expr,
}

impl Delete {
    pub fn new(table: impl Into<String>, filter: impl Into<Expr>) -> Delete {
        Delete {
            table: table.into(),
            filter: filter.into(),
        }
    }
}
