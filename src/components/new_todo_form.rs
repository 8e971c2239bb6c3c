//! New Todo Form Component
//!
//! Text input plus the add and clear-all buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form for creating new todos and clearing all of them
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (draft, set_draft) = signal(String::new());

    // Shared by the Enter key and the add button. A rejected (blank)
    // submission leaves the draft untouched.
    let submit = {
        let ctx = ctx.clone();
        move || {
            if ctx.todos.create(&draft.get_untracked()).is_some() {
                set_draft.set(String::new());
            }
        }
    };
    let submit_on_enter = submit.clone();

    let clear_all = {
        let ctx = ctx.clone();
        move |_| ctx.todos.clear()
    };

    view! {
        <div class="new-todo-form">
            <input
                id="input-text"
                type="text"
                placeholder="What needs doing?"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit_on_enter();
                    }
                }
            />
            <button id="input-button" on:click=move |_| submit()>"Add"</button>
            <button id="input-clear" on:click=clear_all>"Clear all"</button>
        </div>
    }
}
