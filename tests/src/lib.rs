mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::{DriverOp, LoggingDriver};

use stdmodel::Models;
use stdmodel_core::driver::{Capability, Upsert};
use stdmodel_driver_sqlite::Sqlite;

/// A backend that supports neither upsert nor `RETURNING`.
pub static PLAIN_SQL: Capability = Capability {
    upsert: Upsert::Unsupported,
    returning: false,
};

/// Upsert through the MySQL code path, without `RETURNING`.
pub static NO_RETURNING: Capability = Capability {
    upsert: Upsert::OnDuplicateKey,
    returning: false,
};

pub const SCHEMA: &str = "
    CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE TABLE posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        active BOOLEAN NOT NULL,
        deleted BOOLEAN NOT NULL
    );

    CREATE TABLE tags (
        name TEXT PRIMARY KEY
    );
";

/// An in-memory database wrapped in a [`LoggingDriver`].
pub struct Test {
    pub models: Models,
    log: ExecLog,
}

impl Test {
    pub fn new() -> Test {
        Test::with_capability(None)
    }

    /// Reports `capability` in place of SQLite's own.
    pub fn with_capability(capability: Option<&'static Capability>) -> Test {
        init_tracing();

        let sqlite = Sqlite::in_memory().unwrap();
        sqlite.execute_batch(SCHEMA).unwrap();

        let driver = LoggingDriver::new(Box::new(sqlite), capability);
        let log = ExecLog::new(driver.ops_log_handle());

        Test {
            models: Models::new(driver),
            log,
        }
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

impl Default for Test {
    fn default() -> Self {
        Test::new()
    }
}

/// Installs a subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
