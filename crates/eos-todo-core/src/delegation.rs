//! Code Delegation
//!
//! Lets the todo contract act with the sender's `active` authority so
//! actions do not need a fresh signature each time.

use crate::config::LedgerConfig;
use crate::domain::{LedgerError, LedgerResult, PermissionLevel, PermissionLevelWeight};
use crate::ledger::{PermissionUpdate, TodoLedger};

pub const ACTIVE_PERMISSION: &str = "active";
pub const CODE_PERMISSION: &str = "eosio.code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationOutcome {
    /// The grant was already in place, nothing was submitted
    AlreadyPresent,
    /// An `updateauth` adding the grant was accepted
    Granted,
}

/// `contract@eosio.code` with weight 1
pub fn code_grant(contract: &str) -> PermissionLevelWeight {
    PermissionLevelWeight {
        permission: PermissionLevel {
            actor: contract.to_string(),
            permission: CODE_PERMISSION.to_string(),
        },
        weight: 1,
    }
}

/// Make sure the sender's `active` permission authorizes the contract's code.
pub async fn ensure_delegation<L: TodoLedger + ?Sized>(
    ledger: &L,
    config: &LedgerConfig,
) -> LedgerResult<DelegationOutcome> {
    let account = ledger.get_account(&config.contract_sender).await?;
    let active = account
        .permission(ACTIVE_PERMISSION)
        .ok_or_else(|| LedgerError::MissingPermission(ACTIVE_PERMISSION.to_string()))?;

    let mut auth = active.required_auth.clone();
    if !auth.grant(code_grant(&config.contract_name)) {
        tracing::debug!(account = %config.contract_sender, "code delegation already present");
        return Ok(DelegationOutcome::AlreadyPresent);
    }

    let update = PermissionUpdate {
        account: config.contract_sender.clone(),
        permission: active.perm_name.clone(),
        parent: active.parent.clone(),
        auth,
        authority: config.owner_authority(),
    };
    ledger.update_permission(&update).await?;

    tracing::info!(
        account = %config.contract_sender,
        contract = %config.contract_name,
        "granted eosio.code delegation"
    );
    Ok(DelegationOutcome::Granted)
}
