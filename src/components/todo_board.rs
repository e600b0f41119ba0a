//! Todo Board Component
//!
//! Owns the board context: heading with the saving indicator, the list
//! and the entry form.

use eos_todo_core::TodoId;
use leptos::prelude::*;

use super::{TodoEntryForm, TodoItemRow};
use crate::context::{BoardContext, WalletStatus};

#[component]
pub fn TodoBoardView() -> impl IntoView {
    let ctx = BoardContext::new();
    provide_context(ctx);
    ctx.connect();

    let on_submit = Callback::new(move |description: String| ctx.create(description));
    let on_complete = Callback::new(move |id: TodoId| ctx.complete(id));
    let on_remove = Callback::new(move |id: TodoId| ctx.destroy(id));

    view! {
        <div class="todo-board">
            <h3>
                "My TODOs: "
                <Show when=move || ctx.board.with(|b| b.loading())>
                    <small>"(saving...)"</small>
                </Show>
            </h3>

            <Show when=move || ctx.wallet.with(|w| *w != WalletStatus::Connected)>
                <p class="wallet-status">{move || ctx.wallet.with(|w| w.label())}</p>
            </Show>

            <ul class="todo-list">
                <For
                    each=move || ctx.board.with(|b| b.todos().to_vec())
                    key=|todo| (todo.id, todo.completed, todo.description.clone())
                    children=move |todo| {
                        view! {
                            <TodoItemRow item=todo on_complete=on_complete on_remove=on_remove />
                        }
                    }
                />
            </ul>
            <br />
            <TodoEntryForm on_submit=on_submit />
        </div>
    }
}
