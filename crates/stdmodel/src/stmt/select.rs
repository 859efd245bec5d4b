use crate::{Model, Models};

use stdmodel_core::{
    stmt::{Direction, Expr, OrderByExpr, Query, Value},
    Result,
};

use std::{fmt, marker::PhantomData};

/// A query over the table of `M`, built up by chaining.
///
/// Obtained from [`Models::select`], which has already applied the model's
/// default scope.
pub struct Select<M> {
    untyped: Query,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Select<M> {
    /// Selects every column of the model's table, unfiltered.
    pub(crate) fn new() -> Select<M> {
        let table = M::table();
        let columns = table.column_names().map(str::to_string).collect();

        Select {
            untyped: Query::new(&table.name, columns),
            _p: PhantomData,
        }
    }

    /// ANDs `expr` onto the filter.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select<M> {
        self.untyped.and_filter(expr);
        self
    }

    /// ANDs `column = value` onto the filter.
    pub fn filter_eq(self, column: &str, value: impl Into<Value>) -> Select<M> {
        self.filter(Expr::eq(Expr::column(column), value.into()))
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Select<M> {
        self.untyped.order_by.push(OrderByExpr {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Select<M> {
        self.untyped.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select<M> {
        self.untyped.offset = Some(offset);
        self
    }

    pub fn stmt(&self) -> &Query {
        &self.untyped
    }

    pub fn into_stmt(self) -> Query {
        self.untyped
    }

    /// Loads every matching row.
    pub async fn all(self, models: &Models) -> Result<Vec<M>> {
        models.all(self).await
    }

    /// Loads the first matching row, if any.
    pub async fn first(self, models: &Models) -> Result<Option<M>> {
        models.first(self.limit(1)).await
    }
}

impl<M> Clone for Select<M> {
    fn clone(&self) -> Self {
        Select {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> fmt::Debug for Select<M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.untyped.fmt(fmt)
    }
}
