//! Todo Board State
//!
//! Local todo list with optimistic mutations. Every mutation is applied
//! immediately and recorded in an undo log under a [`PendingToken`]; once
//! the ledger answers, [`TodoBoard::settle`] either forgets the entry or
//! reverts exactly that mutation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{LedgerError, TodoId, TodoItem};
use crate::ledger::TodoAction;

/// Identifies one in-flight mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingToken(u64);

/// A mutation already applied locally, waiting to be sent to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMutation {
    pub token: PendingToken,
    pub action: TodoAction,
}

/// How a settled mutation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Confirmed,
    Reverted(LedgerError),
}

/// Rejected board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    UnknownTodo(TodoId),
    AlreadyCompleted(TodoId),
    /// Only completed items can be removed
    NotCompleted(TodoId),
    /// The highest possible row id is already taken
    IdsExhausted,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::UnknownTodo(id) => write!(f, "No todo with id {}", id),
            BoardError::AlreadyCompleted(id) => write!(f, "Todo {} is already completed", id),
            BoardError::NotCompleted(id) => write!(f, "Todo {} must be completed first", id),
            BoardError::IdsExhausted => write!(f, "No todo ids left"),
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Undo {
    Remove(TodoId),
    Uncomplete(TodoId),
    Reinsert { index: usize, item: TodoItem },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UndoEntry {
    token: PendingToken,
    undo: Undo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoBoard {
    todos: Vec<TodoItem>,
    pending: Vec<UndoEntry>,
    next_token: u64,
    /// Highest id ever seen, including rows whose removal is still pending
    high_water: TodoId,
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos in display order
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// True while any mutation is waiting for the ledger
    pub fn loading(&self) -> bool {
        self.pending_count() > 0
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Replace the list wholesale with rows read from the ledger
    pub fn replace_all(&mut self, rows: Vec<TodoItem>) {
        let highest = rows.iter().map(|t| t.id).max().unwrap_or(0);
        self.high_water = self.high_water.max(highest);
        self.todos = rows;
    }

    /// Id for the next created row: one past the highest id this board has seen.
    /// Never reuses an id, not even one whose destroy is still in flight.
    pub fn next_id(&self) -> Option<TodoId> {
        self.high_water.checked_add(1)
    }

    pub fn begin_create(
        &mut self,
        description: impl Into<String>,
    ) -> Result<PendingMutation, BoardError> {
        let id = self.next_id().ok_or(BoardError::IdsExhausted)?;
        self.high_water = id;
        let item = TodoItem::new(id, description);
        let action = TodoAction::Create {
            id,
            description: item.description.clone(),
        };
        self.todos.push(item);
        Ok(self.record(Undo::Remove(id), action))
    }

    pub fn begin_complete(&mut self, id: TodoId) -> Result<PendingMutation, BoardError> {
        let item = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::UnknownTodo(id))?;
        if item.completed {
            return Err(BoardError::AlreadyCompleted(id));
        }
        item.completed = true;
        Ok(self.record(Undo::Uncomplete(id), TodoAction::Complete { id }))
    }

    pub fn begin_destroy(&mut self, id: TodoId) -> Result<PendingMutation, BoardError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::UnknownTodo(id))?;
        if !self.todos[index].completed {
            return Err(BoardError::NotCompleted(id));
        }
        let item = self.todos.remove(index);
        Ok(self.record(Undo::Reinsert { index, item }, TodoAction::Destroy { id }))
    }

    /// Resolve a pending mutation. Failed mutations are reverted.
    /// Returns `None` if the token is not (or no longer) pending.
    pub fn settle(
        &mut self,
        token: PendingToken,
        outcome: Result<(), LedgerError>,
    ) -> Option<Settlement> {
        let position = self.pending.iter().position(|e| e.token == token)?;
        let entry = self.pending.remove(position);

        match outcome {
            Ok(()) => Some(Settlement::Confirmed),
            Err(err) => {
                self.revert(entry.undo);
                Some(Settlement::Reverted(err))
            }
        }
    }

    fn record(&mut self, undo: Undo, action: TodoAction) -> PendingMutation {
        let token = PendingToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending.push(UndoEntry { token, undo });
        PendingMutation { token, action }
    }

    fn revert(&mut self, undo: Undo) {
        match undo {
            Undo::Remove(id) => {
                if let Some(index) = self.todos.iter().position(|t| t.id == id) {
                    self.todos.remove(index);
                }
            }
            Undo::Uncomplete(id) => {
                if let Some(item) = self.todos.iter_mut().find(|t| t.id == id) {
                    item.completed = false;
                    return;
                }
                // Removed while the completion was in flight: fix the copy a
                // pending destroy would put back
                let parked = self.pending.iter_mut().find_map(|e| match &mut e.undo {
                    Undo::Reinsert { item, .. } if item.id == id => Some(item),
                    _ => None,
                });
                if let Some(item) = parked {
                    item.completed = false;
                }
            }
            Undo::Reinsert { index, item } => {
                // A reload may already have brought the row back
                if self.todos.iter().any(|t| t.id == item.id) {
                    return;
                }
                let index = index.min(self.todos.len());
                self.todos.insert(index, item);
            }
        }
    }
}

/// Somewhere a [`TodoBoard`] lives and can be mutated in place.
///
/// Returns `None` when the board is gone (e.g. its owner was disposed).
pub trait BoardCell {
    fn with_board<R>(&self, f: impl FnOnce(&mut TodoBoard) -> R) -> Option<R>;
}

impl BoardCell for RefCell<TodoBoard> {
    fn with_board<R>(&self, f: impl FnOnce(&mut TodoBoard) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: BoardCell> BoardCell for Rc<T> {
    fn with_board<R>(&self, f: impl FnOnce(&mut TodoBoard) -> R) -> Option<R> {
        (**self).with_board(f)
    }
}
