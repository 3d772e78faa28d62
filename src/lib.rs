mod api;
mod app;
mod category;
mod components;
mod config;
mod logging;
mod markdown;
mod models;
mod pages;
mod scroll_sync;
mod session;
mod state;
mod storage;
mod submit;
mod toolbar;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::new();
    logging::init(&config.log_level);
    tracing::info!(api_url = %config.api_url, "starting blog editor");

    mount_to_body(move || view! { <App config=config /> });
}
