//! Todo Frontend App
//!
//! Root component: one input form above the two membership containers.

use leptos::prelude::*;

use crate::collection::TodoCollection;
use crate::components::{NewTodoForm, TodoSection};
use crate::context::AppContext;
use crate::storage::{BrowserStorage, TodoStorage};

#[component]
pub fn App() -> impl IntoView {
    let todos = TodoCollection::new(TodoStorage::new("my-todos", BrowserStorage));
    todos.load();
    web_sys::console::log_1(
        &format!("[APP] Loaded {} todos", todos.items().get_untracked().len()).into(),
    );

    let items = todos.items();

    // Provide context to all children
    provide_context(AppContext::new(todos));

    view! {
        <div id="todoapp" class="app-layout">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoSection title="Incomplete" completed=false />
            <TodoSection title="Completed" completed=true />

            <p class="item-count">{move || format!("{} items", items.get().len())}</p>
        </div>
    }
}
