#[derive(Debug)]
pub struct Capability {
    /// How the database expresses "insert, or update on key conflict"
    pub upsert: Upsert,

    /// SQL: supports `INSERT ... RETURNING`. When false, generated keys are
    /// read from the driver's last insert id.
    pub returning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// `ON CONFLICT (<key>) DO UPDATE SET c = EXCLUDED.c`
    OnConflict,

    /// `ON DUPLICATE KEY UPDATE c = VALUES(c)`
    OnDuplicateKey,

    /// No upsert syntax; saves are plain inserts
    Unsupported,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        upsert: Upsert::OnConflict,
        returning: true,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        upsert: Upsert::OnConflict,
        returning: true,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        upsert: Upsert::OnDuplicateKey,
        returning: false,
    };
}
