use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use stdmodel_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value of type `ty`.
    pub fn from_sql(row: &Row, index: usize, ty: stmt::Type) -> Result<Self> {
        let value = row.get_ref(index).map_err(Error::driver)?;

        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => match ty {
                stmt::Type::Bool => CoreValue::Bool(value != 0),
                stmt::Type::I32 => CoreValue::I64(value).cast_integer(stmt::Type::I32)?,
                stmt::Type::I64 => CoreValue::I64(value),
                stmt::Type::F64 => CoreValue::F64(value as f64),
                _ => return Err(Error::type_conversion(CoreValue::I64(value), ty.name())),
            },
            ValueRef::Real(value) => match ty {
                stmt::Type::F64 => CoreValue::F64(value),
                _ => return Err(Error::type_conversion(CoreValue::F64(value), ty.name())),
            },
            ValueRef::Text(value) => match ty {
                stmt::Type::String => CoreValue::String(String::from_utf8(value.to_vec())?),
                stmt::Type::Bytes => CoreValue::Bytes(value.to_vec()),
                _ => {
                    let value = CoreValue::String(String::from_utf8_lossy(value).into_owned());
                    return Err(Error::type_conversion(value, ty.name()));
                }
            },
            ValueRef::Blob(value) => match ty {
                stmt::Type::Bytes => CoreValue::Bytes(value.to_vec()),
                _ => return Err(Error::type_conversion(CoreValue::Bytes(value.to_vec()), ty.name())),
            },
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
