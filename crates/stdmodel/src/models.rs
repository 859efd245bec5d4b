use crate::{connect, model::with_query_default, update_columns, Filter, Model, Select};

use stdmodel_core::{
    driver::{operation::QuerySql, Capability, Driver, Response, Upsert},
    err,
    schema::Table,
    stmt::{
        ConflictAction, Delete, Expr, Insert, OnConflict, Query, Statement, Type, Value,
        ValueRecord,
    },
    Error, Result,
};
use tracing::debug;

use std::sync::Arc;

/// Runs model operations against one driver.
///
/// Cloning is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Models {
    driver: Arc<dyn Driver>,
}

impl Models {
    pub fn new(driver: impl Driver) -> Models {
        Models {
            driver: Arc::new(driver),
        }
    }

    /// Connects to the database at `url`, picking the driver from its scheme.
    ///
    /// Recognized schemes are `sqlite:`, `postgresql:` (or `postgres:`) and
    /// `mysql:`, each available when the matching cargo feature is enabled.
    pub async fn connect(url: &str) -> Result<Models> {
        let driver = connect::connect(url).await?;
        Ok(Models {
            driver: Arc::from(driver),
        })
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    pub fn capability(&self) -> &Capability {
        self.driver.capability()
    }

    /// Inserts `record` and reloads it, so generated columns are filled in.
    pub async fn create<M: Model>(&self, record: &mut M) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, "create");

        self.create_impl(table, record)
            .await
            .map_err(|e| e.context(err!("failed to create record in `{}`", table.name)))
    }

    /// Deletes the row with the primary key of `record`.
    ///
    /// Deleting a row that does not exist is not an error.
    pub async fn delete<M: Model>(&self, record: &M) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, "delete");

        self.delete_impl(table, record)
            .await
            .map_err(|e| e.context(err!("failed to delete record from `{}`", table.name)))
    }

    /// Reloads `record` by its primary key.
    pub async fn get<M: Model>(&self, record: &mut M) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, "get");

        self.get_impl(table, record)
            .await
            .map_err(|e| e.context(err!("failed to get record from `{}`", table.name)))
    }

    /// Loads the first row matching `filter` into `record`.
    pub async fn find<M: Model, F: Filter>(&self, record: &mut M, filter: F) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, "find");

        self.find_impl(table, record, &filter)
            .await
            .map_err(|e| e.context(err!("failed to find record in `{}`", table.name)))
    }

    /// Replaces the contents of `records` with every row matching `filter`.
    pub async fn list<M: Model, F: Filter>(&self, records: &mut Vec<M>, filter: F) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, "list");

        self.list_impl(records, &filter)
            .await
            .map_err(|e| e.context(err!("failed to list records from `{}`", table.name)))
    }

    /// Inserts `record`, updating the existing row on a primary key conflict.
    ///
    /// The columns overwritten are the model's `#[model(update)]` columns
    /// plus `additional`; see [`update_columns`](crate::update_columns).
    pub async fn save<M: Model>(&self, record: &M, additional: &[&str]) -> Result<()> {
        let table = M::table();
        debug!(table = %table.name, ?additional, "save");

        self.save_impl(table, record, additional)
            .await
            .map_err(|e| e.context(err!("failed to save record to `{}`", table.name)))
    }

    /// Starts a query over `M` with its default scope applied.
    pub fn select<M: Model>(&self) -> Select<M> {
        with_query_default(Select::new())
    }

    pub(crate) async fn all<M: Model>(&self, query: Select<M>) -> Result<Vec<M>> {
        let table = M::table();
        debug!(table = %table.name, "select");

        self.query(table, query.into_stmt())
            .await?
            .into_iter()
            .map(M::load)
            .collect()
    }

    pub(crate) async fn first<M: Model>(&self, query: Select<M>) -> Result<Option<M>> {
        let table = M::table();
        debug!(table = %table.name, "select first");

        match self.query(table, query.into_stmt()).await?.into_iter().next() {
            Some(row) => Ok(Some(M::load(row)?)),
            None => Ok(None),
        }
    }

    async fn create_impl<M: Model>(&self, table: &'static Table, record: &mut M) -> Result<()> {
        let (mut insert, generated) = build_insert(table, record.to_record());

        if self.capability().returning {
            insert.returning = Some(table.column_names().map(str::to_string).collect());

            let row = self
                .exec_values(table, insert.into())
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| Error::invalid_result("insert returned no rows"))?;

            *record = M::load(row)?;
            return Ok(());
        }

        let response = self.exec(insert.into(), None).await?;

        let mut key = record.to_record();
        if let Some(index) = generated {
            let id = response
                .last_insert_id
                .ok_or_else(|| Error::invalid_result("driver did not report the generated key"))?;
            key[index] = Value::I64(i64::try_from(id)?).cast_integer(table.columns[index].ty)?;
        }

        let query = Select::<M>::new()
            .filter(primary_key_filter(table, &key)?)
            .limit(1);

        let row = self
            .query(table, query.into_stmt())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_result("inserted row could not be read back"))?;

        *record = M::load(row)?;
        Ok(())
    }

    async fn delete_impl<M: Model>(&self, table: &'static Table, record: &M) -> Result<()> {
        let filter = primary_key_filter(table, &record.to_record())?;
        let stmt = Delete::new(&table.name, filter);

        self.exec(stmt.into(), None).await?.rows.into_count()?;
        Ok(())
    }

    async fn get_impl<M: Model>(&self, table: &'static Table, record: &mut M) -> Result<()> {
        let key = record.to_record();
        let query = self
            .select::<M>()
            .filter(primary_key_filter(table, &key)?)
            .limit(1);

        let row = self
            .query(table, query.into_stmt())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::record_not_found(format!(
                    "table={} key={}",
                    table.name,
                    describe_key(table, &key)
                ))
            })?;

        *record = M::load(row)?;
        Ok(())
    }

    async fn find_impl<M: Model, F: Filter>(
        &self,
        table: &'static Table,
        record: &mut M,
        filter: &F,
    ) -> Result<()> {
        let query = filter.bind(self.select::<M>())?.limit(1);

        let row = self
            .query(table, query.into_stmt())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::record_not_found(format!("table={}", table.name)))?;

        *record = M::load(row)?;
        Ok(())
    }

    async fn list_impl<M: Model, F: Filter>(&self, records: &mut Vec<M>, filter: &F) -> Result<()> {
        let query = filter.bind(self.select::<M>())?;
        *records = self.all(query).await?;
        Ok(())
    }

    async fn save_impl<M: Model>(
        &self,
        table: &'static Table,
        record: &M,
        additional: &[&str],
    ) -> Result<()> {
        let (mut insert, _) = build_insert(table, record.to_record());

        match self.capability().upsert {
            Upsert::OnConflict | Upsert::OnDuplicateKey => {
                let mut columns = update_columns::resolve(table, additional);

                if columns.is_empty() {
                    columns = table.non_key_columns().map(|c| c.name.clone()).collect();
                }

                let action = if columns.is_empty() {
                    ConflictAction::DoNothing
                } else {
                    ConflictAction::DoUpdate(columns)
                };

                insert.on_conflict = Some(OnConflict {
                    target: table.primary_key_columns().map(|c| c.name.clone()).collect(),
                    action,
                });
            }
            Upsert::Unsupported => {}
        }

        self.exec(insert.into(), None).await?.rows.into_count()?;
        Ok(())
    }

    async fn query(&self, table: &Table, query: Query) -> Result<Vec<ValueRecord>> {
        self.exec_values(table, query.into()).await
    }

    /// Executes a statement returning every column of `table`.
    async fn exec_values(&self, table: &Table, stmt: Statement) -> Result<Vec<ValueRecord>> {
        let ret = table.columns.iter().map(|column| column.ty).collect();
        self.exec(stmt, Some(ret)).await?.rows.into_values()
    }

    async fn exec(&self, stmt: Statement, ret: Option<Vec<Type>>) -> Result<Response> {
        self.driver.exec(QuerySql { stmt, ret }.into()).await
    }
}

/// Builds the INSERT for `values`, leaving out unset auto columns.
///
/// Also returns the index of the column the database generates, if any.
fn build_insert(table: &Table, values: ValueRecord) -> (Insert, Option<usize>) {
    let mut insert = Insert::new(&table.name);
    let mut generated = None;

    for (index, (column, value)) in table.columns.iter().zip(values).enumerate() {
        if column.auto_increment && value.is_unset_key() {
            generated.get_or_insert(index);
            continue;
        }

        insert.push(&column.name, value);
    }

    (insert, generated)
}

/// `pk1 = v1 AND pk2 = v2 ...` for the key values in `record`.
fn primary_key_filter(table: &Table, record: &ValueRecord) -> Result<Expr> {
    let predicates = table
        .primary_key
        .iter()
        .map(|&index| {
            let value = record.get(index).cloned().unwrap_or_default();
            Expr::eq(Expr::column(&table.columns[index].name), value)
        })
        .collect();

    Expr::and_from_vec(predicates).ok_or_else(|| err!("table `{}` has no primary key", table.name))
}

fn describe_key(table: &Table, record: &ValueRecord) -> String {
    let fields = table
        .primary_key
        .iter()
        .map(|&index| {
            let value = record.get(index).cloned().unwrap_or_default();
            format!("{}: {value:?}", table.columns[index].name)
        })
        .collect::<Vec<_>>();

    format!("{{{}}}", fields.join(", "))
}
