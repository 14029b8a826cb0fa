use super::Value;
use crate::schema::ColumnId;

use std::collections::HashMap;

/// Supplies column values to expression evaluation.
pub trait Input {
    /// Returns the value of `id` for the current row, or `None` when the row
    /// does not carry that column.
    fn column(&self, id: ColumnId) -> Option<Value>;
}

impl Input for HashMap<ColumnId, Value> {
    fn column(&self, id: ColumnId) -> Option<Value> {
        self.get(&id).cloned()
    }
}

impl<T: Input + ?Sized> Input for &T {
    fn column(&self, id: ColumnId) -> Option<Value> {
        (**self).column(id)
    }
}

/// Evaluation input with no columns. Any column reference is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstInput;

impl Input for ConstInput {
    fn column(&self, _id: ColumnId) -> Option<Value> {
        None
    }
}
