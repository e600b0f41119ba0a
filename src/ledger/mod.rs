//! Wallet & Chain Bindings
//!
//! wasm-bindgen imports for the Scatter wallet object and the eosjs client
//! it hands out, plus the `TodoLedger` implementation on top of them.

mod client;

use js_sys::Promise;
use wasm_bindgen::prelude::*;

pub use client::ScatterLedger;
pub(crate) use client::wallet_error;

#[wasm_bindgen]
extern "C" {
    /// Wallet object injected into `window.scatter` by the extension
    #[derive(Clone)]
    pub type Scatter;

    #[wasm_bindgen(method, catch)]
    fn eos(
        this: &Scatter,
        network: &JsValue,
        eos: &JsValue,
        options: &JsValue,
        protocol: &str,
    ) -> Result<EosClient, JsValue>;

    /// eosjs client whose signing is delegated to the wallet
    #[derive(Clone)]
    pub type EosClient;

    #[wasm_bindgen(method, catch, js_name = getAccount)]
    fn get_account(this: &EosClient, name: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getTableRows)]
    fn get_table_rows(this: &EosClient, query: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn transaction(this: &EosClient, build: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn contract(this: &EosClient, name: &str) -> Result<Promise, JsValue>;

    /// Argument of the `transaction` callback
    type TransactionBuilder;

    #[wasm_bindgen(method)]
    fn updateauth(this: &TransactionBuilder, data: &JsValue, options: &JsValue);

    /// Contract handle generated by eosjs from the contract ABI
    #[derive(Clone)]
    type ContractHandle;

    #[wasm_bindgen(method, catch)]
    fn create(
        this: &ContractHandle,
        sender: &str,
        id: f64,
        description: &str,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn complete(
        this: &ContractHandle,
        sender: &str,
        id: f64,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(
        this: &ContractHandle,
        sender: &str,
        id: f64,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;
}
