//! Ledger Errors
//!
//! Every failure that can come back from the wallet or the chain.

use serde::{Deserialize, Serialize};

/// Common result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    /// The wallet is missing or refused to hand out a client
    Wallet(String),
    /// The node or the contract rejected the request
    Remote(String),
    /// A response did not have the expected shape
    Decode(String),
    /// The account has no permission with this name
    MissingPermission(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            LedgerError::Remote(msg) => write!(f, "Ledger rejected request: {}", msg),
            LedgerError::Decode(msg) => write!(f, "Unexpected ledger response: {}", msg),
            LedgerError::MissingPermission(name) => {
                write!(f, "Account has no '{}' permission", name)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Decode(err.to_string())
    }
}
