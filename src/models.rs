//! Frontend Models
//!
//! Data structures persisted to localStorage.

use serde::{Deserialize, Serialize};

/// A single todo entry.
///
/// The creation timestamp doubles as the identifier: it is unique within a
/// collection and never changes. `completed` is the only field mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation time in milliseconds, used as the identifier
    pub timestamp: u64,
    /// The displayed text of the todo
    pub text: String,
    /// Whether the todo has been completed already
    pub completed: bool,
}

impl TodoItem {
    pub fn new(timestamp: u64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips whether the todo is completed.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
