//! Todo Entity
//!
//! One row of the contract's `todos` table.

use serde::{Deserialize, Serialize};

/// Row identifier used by the contract's primary key
pub type TodoId = u64;

/// A todo row, identical in shape to what `get_table_rows` returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub description: String,
    pub completed: bool,
}

impl TodoItem {
    /// New rows always start out active
    pub fn new(id: TodoId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }
}
