use super::{Comma, Delimited, Ident, Params, ToSql};

use stdmodel_core::stmt::{self, Expr};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Expr::And(expr) => {
                let operands = Delimited(expr.operands.iter().map(Nested), " AND ");
                fmt!(f, operands);
            }
            Expr::BinaryOp(expr) => {
                let op = expr.op.to_string();
                let (lhs, rhs) = (&*expr.lhs, &*expr.rhs);
                fmt!(f, lhs " " op.as_str() " " rhs);
            }
            Expr::Column(expr) => {
                fmt!(f, Ident(&expr.name));
            }
            Expr::InList(expr) if expr.list.is_empty() => {
                // `x IN ()` is not valid SQL; nothing matches an empty list
                fmt!(f, "1 = 0");
            }
            Expr::InList(expr) => {
                let list = Comma(&expr.list);
                fmt!(f, &*expr.expr " IN (" list ")");
            }
            Expr::IsNull(expr) => {
                fmt!(f, &*expr.expr " IS NULL");
            }
            Expr::Not(expr) => {
                let operand = &*expr.expr;
                fmt!(f, "NOT (" operand ")");
            }
            Expr::Or(expr) => {
                let operands = Delimited(expr.operands.iter().map(Nested), " OR ");
                fmt!(f, operands);
            }
            Expr::Value(value) => {
                fmt!(f, value);
            }
        }
    }
}

/// An operand of AND/OR, parenthesized when it is itself a conjunction or
/// disjunction.
struct Nested<'a>(&'a Expr);

impl ToSql for Nested<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.0 {
            Expr::And(_) | Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            expr => fmt!(f, expr),
        }
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let direction = match self.direction {
            stmt::Direction::Asc => " ASC",
            stmt::Direction::Desc => " DESC",
        };
        fmt!(f, Ident(&self.column) direction);
    }
}
