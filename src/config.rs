use serde::Deserialize;
use std::cell::RefCell;

/// Runtime configuration injected by the hosting page before the app runs.
///
/// Mirrors the `runtimeConfig` object the bootstrap script places on the
/// page; only the fields this crate consumes are modelled. Unknown fields
/// are ignored so the page may carry extra settings for other consumers.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "backendUrl", default)]
    backend_url: Option<String>,
}

impl RuntimeConfig {
    /// Build a config pointing at an explicit backend base URL.
    pub fn from_backend_url(url: &str) -> Self {
        Self {
            backend_url: Some(url.to_string()),
        }
    }

    /// Explicitly configured backend base URL, if any.
    ///
    /// An absent field, `null` and `""` all count as "not configured".
    pub fn backend_url(&self) -> Option<&str> {
        match self.backend_url.as_deref() {
            None | Some("") => None,
            some => some,
        }
    }
}

thread_local! {
    // Global copy of the injected config. Stays `None` until the page calls
    // `init_runtime_config`.
    static RUNTIME_CONFIG: RefCell<Option<RuntimeConfig>> = RefCell::new(None);
}

/// Store the injected config, replacing any previous value.
pub(crate) fn set_runtime_config(config: RuntimeConfig) {
    RUNTIME_CONFIG.with(|slot| *slot.borrow_mut() = Some(config));
}

/// Clone of the currently stored config, if one was injected.
pub(crate) fn runtime_config() -> Option<RuntimeConfig> {
    RUNTIME_CONFIG.with(|slot| slot.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config_object(backend_url: Option<&str>) -> JsValue {
        let obj = js_sys::Object::new();
        if let Some(url) = backend_url {
            js_sys::Reflect::set(&obj, &"backendUrl".into(), &url.into()).unwrap();
        }
        obj.into()
    }

    #[wasm_bindgen_test]
    fn deserializes_backend_url_from_js_object() {
        let config: RuntimeConfig =
            serde_wasm_bindgen::from_value(config_object(Some("http://api.example.com")))
                .unwrap();
        assert_eq!(config.backend_url(), Some("http://api.example.com"));
    }

    #[wasm_bindgen_test]
    fn missing_field_means_not_configured() {
        let config: RuntimeConfig =
            serde_wasm_bindgen::from_value(config_object(None)).unwrap();
        assert_eq!(config.backend_url(), None);
    }

    #[wasm_bindgen_test]
    fn null_field_means_not_configured() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"backendUrl".into(), &JsValue::NULL).unwrap();
        let config: RuntimeConfig = serde_wasm_bindgen::from_value(obj.into()).unwrap();
        assert_eq!(config.backend_url(), None);
    }

    #[wasm_bindgen_test]
    fn empty_string_means_not_configured() {
        let config: RuntimeConfig =
            serde_wasm_bindgen::from_value(config_object(Some(""))).unwrap();
        assert_eq!(config.backend_url(), None);
    }

    #[wasm_bindgen_test]
    fn extra_fields_are_ignored() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"backendUrl".into(), &"http://b".into()).unwrap();
        js_sys::Reflect::set(&obj, &"theme".into(), &"dark".into()).unwrap();
        let config: RuntimeConfig = serde_wasm_bindgen::from_value(obj.into()).unwrap();
        assert_eq!(config.backend_url(), Some("http://b"));
    }

    #[wasm_bindgen_test]
    fn reinjection_replaces_stored_config() {
        set_runtime_config(RuntimeConfig::from_backend_url("http://first"));
        set_runtime_config(RuntimeConfig::from_backend_url("http://second"));
        let stored = runtime_config().unwrap();
        assert_eq!(stored.backend_url(), Some("http://second"));
    }
}
