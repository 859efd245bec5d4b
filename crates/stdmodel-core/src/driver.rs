mod capability;
pub use capability::{Capability, Upsert};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// A database backend.
///
/// A driver receives fully built statements, renders them for its SQL
/// flavor, and executes them. It holds no per-model state.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which decides how statements are
    /// built for it.
    fn capability(&self) -> &Capability;

    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
