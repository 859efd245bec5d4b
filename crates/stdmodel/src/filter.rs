use crate::{Model, Select};

use serde_json::{Map, Number, Value as Json};
use stdmodel_core::{stmt::Value, Error, Result};

/// Equality constraints applied by `find` and `list`.
///
/// Derive it with `#[derive(Filter)]`: each field tagged `#[field]` or
/// `#[field("column")]` becomes `column = value` when the field holds a
/// value. Untagged fields and unset `Option` fields bind nothing.
pub trait Filter {
    fn bind<M: Model>(&self, query: Select<M>) -> Result<Select<M>>;
}

/// No constraints
impl Filter for () {
    fn bind<M: Model>(&self, query: Select<M>) -> Result<Select<M>> {
        Ok(query)
    }
}

impl<F: Filter> Filter for Option<F> {
    fn bind<M: Model>(&self, query: Select<M>) -> Result<Select<M>> {
        match self {
            Some(filter) => filter.bind(query),
            None => Ok(query),
        }
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn bind<M: Model>(&self, query: Select<M>) -> Result<Select<M>> {
        (**self).bind(query)
    }
}

/// Dynamic filter keyed by column name.
///
/// `null` binds nothing. An object binds each non-null scalar member; any
/// other shape is rejected.
impl Filter for Json {
    fn bind<M: Model>(&self, query: Select<M>) -> Result<Select<M>> {
        match self {
            Json::Null => Ok(query),
            Json::Object(members) => members.bind(query),
            other => Err(Error::invalid_filter_type(json_type_name(other))),
        }
    }
}

impl Filter for Map<String, Json> {
    fn bind<M: Model>(&self, mut query: Select<M>) -> Result<Select<M>> {
        for (column, member) in self {
            let value = match member {
                Json::Null => continue,
                Json::Bool(v) => Value::Bool(*v),
                Json::Number(v) => number(v)?,
                Json::String(v) => Value::String(v.clone()),
                other => {
                    return Err(Error::invalid_filter_type(format!(
                        "{} (column `{column}`)",
                        json_type_name(other)
                    )))
                }
            };

            query = query.filter_eq(column, value);
        }

        Ok(query)
    }
}

fn number(v: &Number) -> Result<Value> {
    if let Some(v) = v.as_i64() {
        Ok(Value::I64(v))
    } else if let Some(v) = v.as_f64() {
        Ok(Value::F64(v))
    } else {
        Err(Error::invalid_filter_type("number"))
    }
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
