//! EOS Todo Frontend Entry Point

mod app;
mod components;
mod context;
mod ledger;
mod wallet;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting EOS todo frontend");
    mount_to_body(App);
}
