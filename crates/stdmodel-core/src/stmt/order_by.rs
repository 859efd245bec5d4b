#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpr {
    pub column: String,
    pub direction: Direction,
}

impl OrderByExpr {
    pub fn asc(column: impl Into<String>) -> OrderByExpr {
        OrderByExpr {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> OrderByExpr {
        OrderByExpr {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}
