use crate::logging_driver::DriverOp;
use std::sync::{Arc, Mutex};
use stdmodel_core::{
    driver::{Operation, Response},
    stmt::{Statement, Value},
};
use stdmodel_sql::Serializer;

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<(Operation, Response)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }

    /// Remove the first operation and return its statement
    pub fn pop_stmt(&mut self) -> Statement {
        let (operation, _) = self.pop().expect("no operation logged");
        operation.as_query_sql().stmt.clone()
    }

    /// Remove the first operation and render it as SQLite SQL
    pub fn pop_sql(&mut self) -> (String, Vec<Value>) {
        let stmt = self.pop_stmt();
        let mut params = vec![];
        let sql = Serializer::sqlite().serialize(&stmt, &mut params);
        (sql, params)
    }
}
