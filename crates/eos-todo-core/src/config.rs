//! Ledger Configuration
//!
//! Compiled-in network and contract settings.

use serde::{Deserialize, Serialize};

pub const CONTRACT_NAME: &str = "inno";
/// Account that signs actions; must be paired with a key in the wallet
pub const CONTRACT_SENDER: &str = "inno";
pub const TODO_TABLE: &str = "todos";

pub const NETWORK_PROTOCOL: &str = "http";
pub const NETWORK_BLOCKCHAIN: &str = "eos";
pub const NETWORK_HOST: &str = "dev.cryptolions.io";
pub const NETWORK_PORT: u16 = 38888;
pub const CHAIN_ID: &str = "038f4b0fc8ff18a4f0842a8f0564611f6e96e8535901dd45e43ac8691a1c4dca";

/// Network descriptor handed to the wallet as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub protocol: String,
    pub blockchain: String,
    pub host: String,
    pub port: u16,
    pub chain_id: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            protocol: NETWORK_PROTOCOL.to_string(),
            blockchain: NETWORK_BLOCKCHAIN.to_string(),
            host: NETWORK_HOST.to_string(),
            port: NETWORK_PORT,
            chain_id: CHAIN_ID.to_string(),
        }
    }
}

impl NetworkConfig {
    pub fn endpoint(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

/// Everything the session needs to talk to the todo contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub contract_name: String,
    pub contract_sender: String,
    pub table: String,
    pub network: NetworkConfig,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            contract_name: CONTRACT_NAME.to_string(),
            contract_sender: CONTRACT_SENDER.to_string(),
            table: TODO_TABLE.to_string(),
            network: NetworkConfig::default(),
        }
    }
}

impl LedgerConfig {
    /// Actors authorizing contract actions
    pub fn sender_authorization(&self) -> Vec<String> {
        vec![self.contract_sender.clone()]
    }

    /// Authority used to rewrite the sender's permissions
    pub fn owner_authority(&self) -> String {
        format!("{}@owner", self.contract_sender)
    }
}
