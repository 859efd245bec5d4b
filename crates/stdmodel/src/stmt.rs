mod primitive;
pub use primitive::Primitive;

mod select;
pub use select::Select;

pub use stdmodel_core::stmt::{
    ConflictAction, Delete, Direction, Expr, Insert, OnConflict, OrderByExpr, Query, Statement,
    Type, Value, ValueRecord,
};
