use crate::{stmt::Primitive, Select};

use stdmodel_core::{err, schema::Table, stmt::ValueRecord, Result};

use std::marker::PhantomData;

/// A struct persisted as one row of a table.
///
/// Usually implemented with `#[derive(Model)]`. Fields are loaded and stored
/// in the order of [`Table::columns`].
pub trait Model: Sized + Send + Sync + 'static {
    /// Scope applied to every read of this model.
    ///
    /// `#[derive(Model)]` returns [`QueryDefault::query_default`] when the
    /// model implements [`QueryDefault`], and `None` otherwise.
    fn default_scope() -> Option<fn(Select<Self>) -> Select<Self>>;

    /// Column mapping for the model
    fn table() -> &'static Table;

    /// Load an instance of the model from a row holding every column.
    fn load(record: ValueRecord) -> Result<Self>;

    /// Values of every column, in column order.
    fn to_record(&self) -> ValueRecord;
}

/// Default scope for reads of a model.
///
/// Implemented by hand. Every read through [`Models`](crate::Models) picks
/// it up without further wiring. The returned query may only add predicates or ordering; it is applied
/// before any caller filter.
pub trait QueryDefault: Model {
    fn query_default(query: Select<Self>) -> Select<Self>;
}

/// Applies the model's default scope, if it has one.
pub(crate) fn with_query_default<M: Model>(query: Select<M>) -> Select<M> {
    match M::default_scope() {
        Some(query_default) => query_default(query),
        None => query,
    }
}

#[doc(hidden)]
pub struct DefaultScope<M>(PhantomData<fn() -> M>);

impl<M> DefaultScope<M> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> DefaultScope<M> {
        DefaultScope(PhantomData)
    }
}

/// Picked by method resolution on `&&DefaultScope<M>` when `M: QueryDefault`.
#[doc(hidden)]
pub trait ViaQueryDefault {
    type Model: Model;

    fn resolve(&self) -> Option<fn(Select<Self::Model>) -> Select<Self::Model>>;
}

impl<M: QueryDefault> ViaQueryDefault for &DefaultScope<M> {
    type Model = M;

    fn resolve(&self) -> Option<fn(Select<M>) -> Select<M>> {
        Some(M::query_default)
    }
}

/// Fallback reached after one auto-deref, for models without a scope.
#[doc(hidden)]
pub trait WithoutQueryDefault {
    type Model: Model;

    fn resolve(&self) -> Option<fn(Select<Self::Model>) -> Select<Self::Model>>;
}

impl<M: Model> WithoutQueryDefault for DefaultScope<M> {
    type Model = M;

    fn resolve(&self) -> Option<fn(Select<M>) -> Select<M>> {
        None
    }
}

#[doc(hidden)]
pub fn load_field<T: Primitive>(
    record: &mut ValueRecord,
    index: usize,
    model: &str,
    field: &str,
) -> Result<T> {
    T::load(record.take(index)).map_err(|e| e.context(err!("failed to load {model}::{field}")))
}
