use stdmodel_core::{
    stmt::{Type, Value},
    Error, Result,
};

/// A field type that maps to a single column.
pub trait Primitive: Sized {
    const NULLABLE: bool = false;

    /// Column type used to decode this field from a row
    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;

    /// Value bound by a derived filter, or `None` to leave the column
    /// unconstrained.
    fn to_filter_value(&self) -> Option<Value> {
        Some(self.to_value())
    }
}

impl Primitive for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for i32 {
    fn ty() -> Type {
        Type::I32
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => {
                i32::try_from(v).map_err(|_| Error::type_conversion(Value::I64(v), "i32"))
            }
            value => Err(Error::type_conversion(value, "i32")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I32(*self)
    }
}

impl Primitive for i64 {
    fn ty() -> Type {
        Type::I64
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl Primitive for f64 {
    fn ty() -> Type {
        Type::F64
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn ty() -> Type {
        Type::Bytes
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn to_filter_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_filter_value)
    }
}
