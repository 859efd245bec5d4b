use super::Expr;

/// A column reference by storage name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    pub name: String,
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn { name: name.into() }.into()
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Expr::Column(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
