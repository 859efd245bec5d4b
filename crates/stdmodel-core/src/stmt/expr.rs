use super::*;

/// A boolean or scalar expression used in `WHERE` clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column by name
    Column(ExprColumn),

    /// `expr IN (values...)`
    InList(ExprInList),

    /// `expr IS NULL`
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// A literal value, always bound as a parameter
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Expr::Value(value.into())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expr::Value(_))
    }

    /// Number of predicates when the expression is viewed as a conjunction.
    pub fn conjunction_len(&self) -> usize {
        match self {
            Expr::And(expr_and) => expr_and.operands.len(),
            _ => 1,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Value(Value::Bool(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(Value::I64(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Value(Value::String(value))
    }
}
