//! UI Components
//!
//! Leptos components for the todo board.

mod todo_board;
mod todo_entry_form;
mod todo_item_row;

pub use todo_board::TodoBoardView;
pub use todo_entry_form::TodoEntryForm;
pub use todo_item_row::TodoItemRow;
