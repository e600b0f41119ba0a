//! Wallet Acquisition
//!
//! The Scatter extension publishes itself on `window.scatter` and fires
//! `scatterLoaded` on the document once. The handle is taken exactly once
//! and the global slot is cleared.

use eos_todo_core::{LedgerError, LedgerResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::ledger::{wallet_error, Scatter};

pub const SCATTER_LOADED_EVENT: &str = "scatterLoaded";
const SCATTER_SLOT: &str = "scatter";

/// Resolve once the wallet is available. Never resolves if no wallet shows up.
pub async fn acquire_scatter() -> LedgerResult<Scatter> {
    let window = web_sys::window().ok_or_else(|| LedgerError::Wallet("no window".to_string()))?;

    // The extension may have loaded before we started listening
    if let Some(scatter) = take_injected(&window)? {
        return Ok(scatter);
    }

    let document = window
        .document()
        .ok_or_else(|| LedgerError::Wallet("no document".to_string()))?;

    let mut listen_error = None;
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
            SCATTER_LOADED_EVENT,
            &resolve,
            &options,
        ) {
            listen_error = Some(err);
        }
    });
    if let Some(err) = listen_error {
        return Err(wallet_error(err));
    }

    tracing::info!("waiting for {}", SCATTER_LOADED_EVENT);
    JsFuture::from(ready).await.map_err(wallet_error)?;

    take_injected(&window)?
        .ok_or_else(|| LedgerError::Wallet(format!("{} fired without a wallet", SCATTER_LOADED_EVENT)))
}

/// Move the injected handle out of the global slot
fn take_injected(window: &web_sys::Window) -> LedgerResult<Option<Scatter>> {
    let slot = JsValue::from_str(SCATTER_SLOT);
    let handle = js_sys::Reflect::get(window, &slot).map_err(wallet_error)?;
    if handle.is_null() || handle.is_undefined() {
        return Ok(None);
    }
    js_sys::Reflect::set(window, &slot, &JsValue::NULL).map_err(wallet_error)?;
    Ok(Some(handle.unchecked_into()))
}
