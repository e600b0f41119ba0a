//! Ledger Capability - Core Traits
//!
//! Abstract interface to the chain and the todo contract.
//! The browser implementation goes through the wallet-injected eosjs client;
//! tests use an in-memory ledger.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, LedgerResult, RequiredAuth, TodoId, TodoItem};

/// Read access to a contract table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableQuery {
    pub code: String,
    pub scope: String,
    pub table: String,
    pub json: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TableQuery {
    /// All rows of `table` under the contract's own scope
    pub fn contract_table(contract: &str, table: &str) -> Self {
        Self {
            code: contract.to_string(),
            scope: contract.to_string(),
            table: table.to_string(),
            json: true,
            lower_bound: None,
            limit: None,
        }
    }

    pub fn starting_at(mut self, id: TodoId) -> Self {
        self.lower_bound = Some(id.to_string());
        self
    }
}

/// One page of table rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRows {
    pub rows: Vec<TodoItem>,
    #[serde(default)]
    pub more: bool,
}

/// `updateauth` payload for a single permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionUpdate {
    pub account: String,
    pub permission: String,
    pub parent: String,
    pub auth: RequiredAuth,
    /// `actor@permission` signing the update
    #[serde(skip)]
    pub authority: String,
}

/// Actors that authorize a contract action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorization {
    pub authorization: Vec<String>,
}

/// Actions exposed by the todo contract
#[async_trait(?Send)]
pub trait TodoContract {
    async fn create(
        &self,
        sender: &str,
        id: TodoId,
        description: &str,
        auth: &Authorization,
    ) -> LedgerResult<()>;

    async fn complete(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()>;

    async fn destroy(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()>;
}

/// Chain access granted by the wallet
///
/// Not `Send`: the browser client lives on the page's only thread.
#[async_trait(?Send)]
pub trait TodoLedger {
    type Contract: TodoContract;

    /// Fetch an account with its permission set
    async fn get_account(&self, name: &str) -> LedgerResult<Account>;

    /// Submit a transaction holding one `updateauth` action
    async fn update_permission(&self, update: &PermissionUpdate) -> LedgerResult<()>;

    async fn get_table_rows(&self, query: &TableQuery) -> LedgerResult<TableRows>;

    /// Resolve a handle to a deployed contract
    async fn contract(&self, name: &str) -> LedgerResult<Self::Contract>;
}

/// A contract action aimed at a specific row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Create { id: TodoId, description: String },
    Complete { id: TodoId },
    Destroy { id: TodoId },
}

impl TodoAction {
    pub fn name(&self) -> &'static str {
        match self {
            TodoAction::Create { .. } => "create",
            TodoAction::Complete { .. } => "complete",
            TodoAction::Destroy { .. } => "destroy",
        }
    }

    pub fn target(&self) -> TodoId {
        match self {
            TodoAction::Create { id, .. }
            | TodoAction::Complete { id }
            | TodoAction::Destroy { id } => *id,
        }
    }

    /// Push this action through `contract` on behalf of `sender`
    pub async fn submit<C: TodoContract + ?Sized>(
        &self,
        contract: &C,
        sender: &str,
        auth: &Authorization,
    ) -> LedgerResult<()> {
        match self {
            TodoAction::Create { id, description } => {
                contract.create(sender, *id, description, auth).await
            }
            TodoAction::Complete { id } => contract.complete(sender, *id, auth).await,
            TodoAction::Destroy { id } => contract.destroy(sender, *id, auth).await,
        }
    }
}
