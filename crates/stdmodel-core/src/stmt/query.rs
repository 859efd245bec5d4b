use super::{Expr, OrderByExpr};

/// `SELECT <columns> FROM <table> [WHERE ..] [ORDER BY ..] [LIMIT ..] [OFFSET ..]`
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: String,
    pub columns: Vec<String>,
    pub filter: Option<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Query {
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Query {
        Query {
            table: table.into(),
            columns,
            filter: None,
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// ANDs `expr` onto the existing filter, after any predicate already there.
    pub fn and_filter(&mut self, expr: impl Into<Expr>) {
        let expr = expr.into();
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr,
        });
    }

    /// Number of top-level predicates in the filter.
    pub fn predicate_count(&self) -> usize {
        self.filter.as_ref().map(Expr::conjunction_len).unwrap_or(0)
    }
}
