//! Browser Helpers
//!
//! Thin wrappers over `window` APIs used across pages.

use wasm_bindgen::JsValue;

/// `localStorage`, or `None` when storage is disabled
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Current path of the document location
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a history entry without reloading the page
pub fn push_path(path: &str) {
    let Some(window) = web_sys::window() else { return };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("history.pushState failed for {}: {:?}", path, e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Best-effort message from a rejected JS promise
pub fn js_error_message(err: &JsValue) -> String {
    use wasm_bindgen::JsCast;

    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
