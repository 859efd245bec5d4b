use super::{Comma, Ident, Params, ToSql};

use stdmodel_core::stmt::{self, ConflictAction};

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let table = Ident(&self.table);

        fmt!(f, "SELECT " columns " FROM " table);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.order_by.is_empty() {
            let order_by = Comma(&self.order_by);
            fmt!(f, " ORDER BY " order_by);
        }

        match (self.limit, self.offset) {
            (Some(limit), offset) => {
                fmt!(f, " LIMIT " limit);
                if let Some(offset) = offset {
                    fmt!(f, " OFFSET " offset);
                }
            }
            (None, Some(offset)) => {
                // OFFSET needs a LIMIT on SQLite and MySQL
                let limit = match f.serializer.flavor {
                    super::Flavor::Postgresql => " LIMIT ALL",
                    super::Flavor::Sqlite => " LIMIT -1",
                    super::Flavor::Mysql => " LIMIT 18446744073709551615",
                };
                fmt!(f, limit " OFFSET " offset);
            }
            (None, None) => {}
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        assert_eq!(
            self.columns.len(),
            self.values.len(),
            "insert column and value count mismatch"
        );

        let table = Ident(&self.table);
        fmt!(f, "INSERT INTO " table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, " () VALUES ()");
            } else {
                fmt!(f, " DEFAULT VALUES");
            }
        } else {
            let columns = Comma(self.columns.iter().map(Ident));
            let values = &self.values;
            fmt!(f, " (" columns ") VALUES " values);
        }

        if let Some(on_conflict) = &self.on_conflict {
            on_conflict.to_sql(f);
        }

        if let Some(returning) = &self.returning {
            assert!(
                !f.serializer.is_mysql(),
                "MySQL does not support INSERT ... RETURNING"
            );
            let columns = Comma(returning.iter().map(Ident));
            fmt!(f, " RETURNING " columns);
        }
    }
}

impl ToSql for &stmt::OnConflict {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if f.serializer.is_mysql() {
            // MySQL detects the conflict on any unique key; there is no target
            match &self.action {
                ConflictAction::DoUpdate(columns) => {
                    let assignments = Comma(columns.iter().map(|c| MysqlAssignment(c)));
                    fmt!(f, " ON DUPLICATE KEY UPDATE " assignments);
                }
                ConflictAction::DoNothing => {
                    // Assigning a key column to itself keeps the row untouched
                    let Some(column) = self.target.first() else {
                        panic!("ON DUPLICATE KEY without a key column");
                    };
                    fmt!(f, " ON DUPLICATE KEY UPDATE " Ident(column) " = " Ident(column));
                }
            }
        } else {
            let target = Comma(self.target.iter().map(Ident));
            fmt!(f, " ON CONFLICT (" target ")");

            match &self.action {
                ConflictAction::DoUpdate(columns) => {
                    let assignments = Comma(columns.iter().map(|c| ExcludedAssignment(c)));
                    fmt!(f, " DO UPDATE SET " assignments);
                }
                ConflictAction::DoNothing => fmt!(f, " DO NOTHING"),
            }
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = &self.filter;
        fmt!(f, "DELETE FROM " table " WHERE " filter);
    }
}

/// `"c" = EXCLUDED."c"`
struct ExcludedAssignment<'a>(&'a str);

impl ToSql for ExcludedAssignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = EXCLUDED." Ident(self.0));
    }
}

/// `` `c` = VALUES(`c`) ``
struct MysqlAssignment<'a>(&'a str);

impl ToSql for MysqlAssignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = VALUES(" Ident(self.0) ")");
    }
}
