//! Todo Item Component
//!
//! One rendered todo row. The checkbox mirrors the completed flag and
//! toggles it on change.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TodoItem;

/// A single todo row with its completion checkbox
#[component]
pub fn TodoItemView(item: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let timestamp = item.timestamp;
    let on_toggle = move |_| ctx.todos.toggle(timestamp);

    view! {
        <div class="todo" id=timestamp.to_string()>
            <label>
                <input type="checkbox" prop:checked=item.completed on:change=on_toggle />
                <span class="todo-text">{item.text.clone()}</span>
            </label>
        </div>
    }
}
