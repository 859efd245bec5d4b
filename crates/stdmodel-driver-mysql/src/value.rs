use mysql_async::prelude::ToValue;
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
    /// Converts this MySQL driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Takes the value at `index` out of `row`, converting it to `ty`.
    pub fn from_sql(index: usize, row: &mut mysql_async::Row, ty: stmt::Type) -> Result<Self> {
        use mysql_async::Value as SqlValue;

        let value = row
            .take::<SqlValue, usize>(index)
            .unwrap_or(SqlValue::NULL);

        let core_value = match value {
            SqlValue::NULL => CoreValue::Null,
            SqlValue::Int(value) => integer(value, ty)?,
            SqlValue::UInt(value) => integer(i64::try_from(value)?, ty)?,
            SqlValue::Float(value) if ty == stmt::Type::F64 => CoreValue::F64(value.into()),
            SqlValue::Double(value) if ty == stmt::Type::F64 => CoreValue::F64(value),
            SqlValue::Bytes(value) => match ty {
                stmt::Type::String => CoreValue::String(String::from_utf8(value)?),
                stmt::Type::Bytes => CoreValue::Bytes(value),
                _ => return Err(Error::type_conversion(CoreValue::Bytes(value), ty.name())),
            },
            value => {
                return Err(Error::invalid_result(format!(
                    "unsupported MySQL value for {}; value={value:?}",
                    ty.name()
                )))
            }
        };

        Ok(Value(core_value))
    }
}

fn integer(value: i64, ty: stmt::Type) -> Result<CoreValue> {
    match ty {
        stmt::Type::Bool => Ok(CoreValue::Bool(value != 0)),
        stmt::Type::I32 | stmt::Type::I64 => CoreValue::I64(value).cast_integer(ty),
        stmt::Type::F64 => Ok(CoreValue::F64(value as f64)),
        _ => Err(Error::type_conversion(CoreValue::I64(value), ty.name())),
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I32(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
        }
    }
}
