//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_item;
mod todo_section;

pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItemView;
pub use todo_section::TodoSection;
