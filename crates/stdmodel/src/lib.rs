//! Generic persistence helpers for plain structs.
//!
//! A struct deriving [`Model`] maps to one table. [`Models`] runs the
//! create, get, find, list, save and delete operations against whichever
//! [`Driver`](driver::Driver) it was built with, applying the model's
//! default query scope on every read.

mod connect;

pub mod driver {
    pub use stdmodel_core::driver::*;
}

mod filter;
pub use filter::Filter;

mod model;
pub use model::{Model, QueryDefault};

mod models;
pub use models::Models;

pub mod stmt;
pub use stmt::{Primitive, Select};

mod update_columns;
pub use update_columns::update_columns;

pub use stdmodel_core::{bail, err, schema, Error, Result};

pub use stdmodel_macros::{Filter, Model};

extern crate self as stdmodel;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::{load_field, DefaultScope, ViaQueryDefault, WithoutQueryDefault},
        Filter, Model, Primitive, QueryDefault, Result, Select,
    };
    pub use std::option::Option;
    pub use stdmodel_core::{
        schema::{Column, Table},
        stmt::ValueRecord,
    };
}
