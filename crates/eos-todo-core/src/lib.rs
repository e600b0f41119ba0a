//! EOS Todo Core
//!
//! Layered like the app it serves:
//! - domain: todo rows, account permissions, errors
//! - ledger: capability traits for the chain and the todo contract
//! - board: local list with optimistic, revertible mutations
//! - delegation / session: the flows that tie board and ledger together

pub mod board;
pub mod config;
pub mod delegation;
pub mod domain;
pub mod ledger;
pub mod session;

#[cfg(test)]
mod memory;

pub use board::{BoardCell, BoardError, PendingMutation, PendingToken, Settlement, TodoBoard};
pub use config::{LedgerConfig, NetworkConfig};
pub use delegation::{code_grant, ensure_delegation, DelegationOutcome};
pub use domain::{
    Account, AccountPermission, LedgerError, LedgerResult, PermissionLevel,
    PermissionLevelWeight, RequiredAuth, TodoId, TodoItem,
};
pub use ledger::{
    Authorization, PermissionUpdate, TableQuery, TableRows, TodoAction, TodoContract, TodoLedger,
};
pub use session::{InitReport, SessionError, SessionResult, TodoSession};
