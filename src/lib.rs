//! URL discovery for the dev-ui WASM frontend.
//!
//! Works out where the backend API and WebSocket server live from the
//! current page location and an optional `runtimeConfig` object injected by
//! the hosting page, accounting for deployments behind a path-prefixing
//! reverse proxy.

use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod error;
mod location;
mod urls;

pub use config::RuntimeConfig;
pub use error::UrlError;
pub use location::{BrowserLocation, LocationContext};
pub use urls::UrlResolver;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}

/// Inject the page's `runtimeConfig` object.
///
/// Called by the bootstrap script before any resolver export is used;
/// calling it again replaces the stored value. A value that fails to
/// deserialize leaves the previous config in place.
#[wasm_bindgen]
pub fn init_runtime_config(config: JsValue) -> Result<(), JsValue> {
    match serde_wasm_bindgen::from_value::<RuntimeConfig>(config) {
        Ok(parsed) => {
            config::set_runtime_config(parsed);
            web_sys::console::log_1(&"runtimeConfig injected".into());
            Ok(())
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to parse runtimeConfig: {}", err).into());
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}

fn with_resolver<T>(
    derive: impl FnOnce(&UrlResolver<'_, BrowserLocation>) -> Result<T, UrlError>,
) -> Result<T, JsValue> {
    let browser = BrowserLocation;
    let config = config::runtime_config();
    let resolver = UrlResolver::new(&browser, config.as_ref());
    derive(&resolver).map_err(JsValue::from)
}

/// Origin of the current page plus the `/dev-ui/` mount point.
#[wasm_bindgen]
pub fn base_url_without_path() -> Result<String, JsValue> {
    with_resolver(|resolver| resolver.base_url_without_path())
}

/// Base URL of the API server: the configured backend URL if one was
/// injected, otherwise derived from the current location.
#[wasm_bindgen]
pub fn api_server_base_url() -> Result<String, JsValue> {
    with_resolver(|resolver| resolver.api_server_base_url())
}

/// Scheme-less address for the WebSocket endpoint.
#[wasm_bindgen]
pub fn ws_server_url() -> Result<String, JsValue> {
    with_resolver(|resolver| resolver.ws_server_url())
}
