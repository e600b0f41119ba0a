//! Scatter-backed Ledger
//!
//! `TodoLedger` over the wallet's eosjs client. Every call returns a JS
//! promise; rejections become `LedgerError::Remote`.

use async_trait::async_trait;
use eos_todo_core::{
    Account, Authorization, LedgerConfig, LedgerError, LedgerResult, PermissionUpdate, TableQuery,
    TableRows, TodoContract, TodoId, TodoLedger,
};
use js_sys::Promise;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{ContractHandle, EosClient, Scatter, TransactionBuilder};

/// Global the eosjs bundle registers itself under
const EOSJS_GLOBAL: &str = "Eos";

pub struct ScatterLedger {
    client: EosClient,
}

impl ScatterLedger {
    /// Ask the wallet for a client bound to the configured network
    pub fn connect(scatter: &Scatter, config: &LedgerConfig) -> LedgerResult<Self> {
        let eos = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(EOSJS_GLOBAL))
            .map_err(wallet_error)?;
        if eos.is_undefined() {
            return Err(LedgerError::Wallet("eosjs is not loaded".to_string()));
        }

        let network = to_js(&config.network)?;
        let options = js_sys::Object::new();
        let client = scatter
            .eos(&network, &eos, &options, &config.network.protocol)
            .map_err(wallet_error)?;

        tracing::info!(endpoint = %config.network.endpoint(), "connected eos client through scatter");
        Ok(Self { client })
    }
}

#[derive(Serialize)]
struct UpdateAuthOptions<'a> {
    authorization: &'a str,
}

#[async_trait(?Send)]
impl TodoLedger for ScatterLedger {
    type Contract = EosContract;

    async fn get_account(&self, name: &str) -> LedgerResult<Account> {
        let value = resolve(self.client.get_account(name)).await?;
        from_js(value)
    }

    async fn update_permission(&self, update: &PermissionUpdate) -> LedgerResult<()> {
        let data = to_js(update)?;
        let options = to_js(&UpdateAuthOptions {
            authorization: &update.authority,
        })?;
        let build = Closure::once_into_js(move |tr: TransactionBuilder| {
            tr.updateauth(&data, &options);
        });

        resolve(self.client.transaction(&build)).await?;
        Ok(())
    }

    async fn get_table_rows(&self, query: &TableQuery) -> LedgerResult<TableRows> {
        let query = to_js(query)?;
        let value = resolve(self.client.get_table_rows(&query)).await?;
        from_js(value)
    }

    async fn contract(&self, name: &str) -> LedgerResult<Self::Contract> {
        let value = resolve(self.client.contract(name)).await?;
        Ok(EosContract {
            handle: value.unchecked_into(),
        })
    }
}

pub struct EosContract {
    handle: ContractHandle,
}

#[async_trait(?Send)]
impl TodoContract for EosContract {
    async fn create(
        &self,
        sender: &str,
        id: TodoId,
        description: &str,
        auth: &Authorization,
    ) -> LedgerResult<()> {
        let options = to_js(auth)?;
        resolve(self.handle.create(sender, id as f64, description, &options)).await?;
        Ok(())
    }

    async fn complete(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()> {
        let options = to_js(auth)?;
        resolve(self.handle.complete(sender, id as f64, &options)).await?;
        Ok(())
    }

    async fn destroy(&self, sender: &str, id: TodoId, auth: &Authorization) -> LedgerResult<()> {
        let options = to_js(auth)?;
        resolve(self.handle.destroy(sender, id as f64, &options)).await?;
        Ok(())
    }
}

// ========================
// JS boundary helpers
// ========================

async fn resolve(promise: Result<Promise, JsValue>) -> LedgerResult<JsValue> {
    let promise = promise.map_err(remote_error)?;
    JsFuture::from(promise).await.map_err(remote_error)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> LedgerResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| LedgerError::Decode(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> LedgerResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| LedgerError::Decode(e.to_string()))
}

pub(crate) fn wallet_error(err: JsValue) -> LedgerError {
    LedgerError::Wallet(describe(&err))
}

fn remote_error(err: JsValue) -> LedgerError {
    LedgerError::Remote(describe(&err))
}

/// eosjs rejects with strings (often JSON from the node) or `Error` objects
fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::JSON::stringify(err)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
