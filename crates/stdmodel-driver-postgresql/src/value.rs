use postgres::types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use stdmodel_core::stmt::{self, Value as CoreValue};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Largest integer magnitude an `f32` holds exactly.
const F32_EXACT: i64 = 1 << 24;

/// Largest integer magnitude an `f64` holds exactly.
const F64_EXACT: i64 = 1 << 53;

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        // The server infers parameter types from the statement. Each value is
        // encoded for that type, or rejected when it does not fit.
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) if *ty == Type::BOOL => value.to_sql(ty, out),
            stmt::Value::I32(value) => integer_to_sql(i64::from(*value), ty, out),
            stmt::Value::I64(value) => integer_to_sql(*value, ty, out),
            stmt::Value::F64(value) => float_to_sql(*value, ty, out),
            stmt::Value::String(value) if is_text(ty) => value.to_sql(ty, out),
            stmt::Value::Bytes(value) if *ty == Type::BYTEA => value.to_sql(ty, out),
            value => Err(mismatch(value, ty)),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(
            *ty,
            Type::BOOL
                | Type::INT2
                | Type::INT4
                | Type::INT8
                | Type::FLOAT4
                | Type::FLOAT8
                | Type::TEXT
                | Type::VARCHAR
                | Type::BPCHAR
                | Type::BYTEA
        )
    }

    to_sql_checked!();
}

fn integer_to_sql(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        Type::INT8 => value.to_sql(ty, out),
        Type::FLOAT4 if value.unsigned_abs() <= F32_EXACT as u64 => {
            (value as f32).to_sql(ty, out)
        }
        Type::FLOAT8 if value.unsigned_abs() <= F64_EXACT as u64 => {
            (value as f64).to_sql(ty, out)
        }
        Type::FLOAT4 | Type::FLOAT8 => {
            Err(format!("integer {value} cannot be represented exactly as {ty}").into())
        }
        _ => Err(mismatch(&stmt::Value::I64(value), ty)),
    }
}

fn float_to_sql(value: f64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::FLOAT8 => value.to_sql(ty, out),
        Type::FLOAT4 => {
            let narrowed = value as f32;

            if f64::from(narrowed) != value && !value.is_nan() {
                return Err(format!("{value} cannot be represented exactly as {ty}").into());
            }

            narrowed.to_sql(ty, out)
        }
        _ => Err(mismatch(&stmt::Value::F64(value), ty)),
    }
}

fn is_text(ty: &Type) -> bool {
    matches!(*ty, Type::TEXT | Type::VARCHAR | Type::BPCHAR)
}

fn mismatch(value: &stmt::Value, ty: &Type) -> BoxError {
    format!("cannot encode {value:?} as {ty}").into()
}
