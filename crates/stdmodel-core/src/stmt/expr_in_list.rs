use super::{Expr, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Value>,
}

impl Expr {
    pub fn in_list(lhs: impl Into<Expr>, list: impl IntoIterator<Item = impl Into<Value>>) -> Expr {
        ExprInList {
            expr: Box::new(lhs.into()),
            list: list.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Expr::InList(value)
    }
}
