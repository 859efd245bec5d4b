use super::Type;
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),

    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Value {
        Value::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for null and for integer zero, the values of an unset generated key.
    pub fn is_unset_key(&self) -> bool {
        matches!(self, Value::Null | Value::I32(0) | Value::I64(0))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Null => "Null",
        }
    }

    /// Returns true if the value can be stored in a column of type `ty`.
    pub fn is_a(&self, ty: Type) -> bool {
        matches!(
            (self, ty),
            (Value::Null, _)
                | (Value::Bool(_), Type::Bool)
                | (Value::I32(_), Type::I32)
                | (Value::I64(_), Type::I64)
                | (Value::F64(_), Type::F64)
                | (Value::String(_), Type::String)
                | (Value::Bytes(_), Type::Bytes)
        )
    }

    /// Converts an integer value to `ty`, failing when it does not fit.
    ///
    /// Non-integer values and non-integer targets are returned unchanged.
    pub fn cast_integer(self, ty: Type) -> Result<Value> {
        Ok(match (self, ty) {
            (Value::I64(v), Type::I32) => Value::I32(
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))?,
            ),
            (Value::I32(v), Type::I64) => Value::I64(v.into()),
            (value, _) => value,
        })
    }

    pub fn to_i64(&self) -> Result<i64> {
        match self {
            Value::I32(v) => Ok((*v).into()),
            Value::I64(v) => Ok(*v),
            _ => Err(Error::type_conversion(self.clone(), "i64")),
        }
    }

    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
