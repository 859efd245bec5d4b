mod value;
pub(crate) use value::Value;

use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};
use stdmodel_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response},
    err, stmt, Error, Result,
};
use stdmodel_sql::Serializer;
use url::Url;

/// SQLite driver over a single `rusqlite` connection.
///
/// Statements are executed one at a time; concurrent callers wait on the
/// connection lock.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database; `sqlite:<path>` opens
    /// (or creates) a database file.
    pub fn new(url: &str) -> Result<Sqlite> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if parsed.path() == ":memory:" {
            Sqlite::in_memory()
        } else {
            Sqlite::open(parsed.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Sqlite> {
        let connection = Connection::open_in_memory().map_err(Error::driver)?;
        Ok(Sqlite::from(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Sqlite> {
        let connection = Connection::open(path).map_err(Error::driver)?;
        Ok(Sqlite::from(connection))
    }

    /// Run raw SQL, such as `CREATE TABLE` statements, on the connection.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.lock()?.execute_batch(sql).map_err(Error::driver)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| err!("sqlite connection lock poisoned"))
    }

    fn exec_sync(&self, op: Operation) -> Result<Response> {
        let Operation::QuerySql(op) = op;

        let mut params: Vec<stmt::Value> = vec![];
        let sql = Serializer::sqlite().serialize(&op.stmt, &mut params);

        tracing::debug!(db.system = "sqlite", sql = %sql, params = params.len(), "exec");

        let connection = self.lock()?;
        let mut prepared = connection.prepare_cached(&sql).map_err(Error::driver)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(ret_tys) = op.ret else {
            let count = prepared
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            let last_insert_id = match op.stmt {
                stmt::Statement::Insert(_) => u64::try_from(connection.last_insert_rowid()).ok(),
                _ => None,
            };

            return Ok(Response::count(count as u64).with_last_insert_id(last_insert_id));
        };

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut items = Vec::with_capacity(ret_tys.len());

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }
}

impl From<Connection> for Sqlite {
    fn from(connection: Connection) -> Sqlite {
        Sqlite {
            connection: Mutex::new(connection),
        }
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        self.exec_sync(op)
    }
}
