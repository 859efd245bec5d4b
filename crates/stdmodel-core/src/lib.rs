pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Column, Table};

pub mod stmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;

pub use async_trait::async_trait;
