//! Todo Item Row Component
//!
//! One entry of the list: checkbox while active, `[x]` plus a remove link
//! once completed.

use eos_todo_core::{TodoId, TodoItem};
use leptos::prelude::*;

/// Controls shown next to a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    pub checkbox: bool,
    pub remove_link: bool,
}

impl RowControls {
    pub fn for_item(item: &TodoItem) -> Self {
        Self {
            checkbox: !item.completed,
            remove_link: item.completed,
        }
    }
}

#[component]
pub fn TodoItemRow(
    item: TodoItem,
    on_complete: Callback<TodoId>,
    on_remove: Callback<TodoId>,
) -> impl IntoView {
    let id = item.id;
    let controls = RowControls::for_item(&item);

    view! {
        <li class={if item.completed { "todo-item completed" } else { "todo-item" }}>
            {if controls.checkbox {
                view! {
                    <input
                        type="checkbox"
                        prop:checked=false
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_complete.run(id);
                        }
                    />
                }.into_any()
            } else {
                view! { <span>"[x] "</span> }.into_any()
            }}
            {item.description}
            " "
            {controls.remove_link.then(|| view! {
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_remove.run(id);
                    }
                >
                    "(remove)"
                </a>
            })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_has_no_remove_link() {
        let controls = RowControls::for_item(&TodoItem::new(1, "Buy milk"));
        assert!(controls.checkbox);
        assert!(!controls.remove_link);
    }

    #[test]
    fn test_completed_item_can_be_removed() {
        let mut item = TodoItem::new(1, "Buy milk");
        item.completed = true;
        let controls = RowControls::for_item(&item);
        assert!(!controls.checkbox);
        assert!(controls.remove_link);
    }
}
