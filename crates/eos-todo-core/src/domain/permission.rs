//! Account Permissions
//!
//! The subset of an EOS account record needed to manage delegation grants.

use serde::{Deserialize, Serialize};

/// `actor@permission` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevel {
    pub actor: String,
    pub permission: String,
}

/// An account authorized inside a permission, with its weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevelWeight {
    pub permission: PermissionLevel,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyWeight {
    pub key: String,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitWeight {
    pub wait_sec: u32,
    pub weight: u16,
}

/// Authority required to satisfy a permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredAuth {
    pub threshold: u32,
    #[serde(default)]
    pub keys: Vec<KeyWeight>,
    #[serde(default)]
    pub accounts: Vec<PermissionLevelWeight>,
    #[serde(default)]
    pub waits: Vec<WaitWeight>,
}

impl RequiredAuth {
    /// Append `grant` unless a structurally equal entry already exists.
    /// Returns `true` if the authority changed.
    pub fn grant(&mut self, grant: PermissionLevelWeight) -> bool {
        if self.accounts.contains(&grant) {
            return false;
        }
        self.accounts.push(grant);
        true
    }
}

/// A named permission of an account (`owner`, `active`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPermission {
    pub perm_name: String,
    #[serde(default)]
    pub parent: String,
    pub required_auth: RequiredAuth,
}

/// Account record as returned by `get_account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_name: String,
    #[serde(default)]
    pub permissions: Vec<AccountPermission>,
}

impl Account {
    pub fn permission(&self, name: &str) -> Option<&AccountPermission> {
        self.permissions.iter().find(|p| p.perm_name == name)
    }
}
