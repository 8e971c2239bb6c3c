//! Todo Section Component
//!
//! One membership container. A todo appears here while its completed flag
//! matches the section's, and moves to the other section when it flips.

use leptos::prelude::*;

use crate::components::TodoItemView;
use crate::context::use_app_context;

/// Container listing the todos whose completed flag matches `completed`
#[component]
pub fn TodoSection(title: &'static str, completed: bool) -> impl IntoView {
    let ctx = use_app_context();
    let items = ctx.todos.items();

    let members = move || {
        items
            .get()
            .into_iter()
            .filter(|item| item.completed == completed)
            .collect::<Vec<_>>()
    };

    view! {
        <section
            class="todo-section"
            id=if completed { "todos-completed" } else { "todos-incomplete" }
        >
            <h2>{title}</h2>
            <For
                each=members
                key=|item| item.timestamp
                children=move |item| view! { <TodoItemView item=item /> }
            />
        </section>
    }
}
