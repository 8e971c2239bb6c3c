//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::collection::TodoCollection;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// The one todo collection for this page session
    pub todos: TodoCollection,
}

impl AppContext {
    pub fn new(todos: TodoCollection) -> Self {
        Self { todos }
    }
}

/// Get the app context, panicking if `App` has not provided it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
