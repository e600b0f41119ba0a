//! Domain Layer
//!
//! Todo rows, account permissions and ledger errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod permission;
mod todo;

pub use error::{LedgerError, LedgerResult};
pub use permission::{
    Account, AccountPermission, KeyWeight, PermissionLevel, PermissionLevelWeight, RequiredAuth,
    WaitWeight,
};
pub use todo::{TodoId, TodoItem};
