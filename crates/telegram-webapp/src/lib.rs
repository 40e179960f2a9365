//! Telegram WebApp Bindings
//!
//! Thin bindings to `window.Telegram.WebApp`, the object injected by
//! `telegram-web-app.js` into Mini App pages.
//! Only the calls a read-only list view needs are bound.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`
    #[derive(Debug, Clone)]
    pub type WebApp;

    /// Expand the Mini App to the maximum available height
    #[wasm_bindgen(method)]
    pub fn expand(this: &WebApp);

    /// Close the Mini App
    #[wasm_bindgen(method)]
    pub fn close(this: &WebApp);

    #[wasm_bindgen(method, getter = initDataUnsafe)]
    fn init_data_unsafe_raw(this: &WebApp) -> JsValue;

    /// Bot API version supported by the client, e.g. "7.2"
    #[wasm_bindgen(method, getter)]
    pub fn version(this: &WebApp) -> String;

    /// Name of the client platform ("android", "ios", "tdesktop", ...)
    #[wasm_bindgen(method, getter)]
    pub fn platform(this: &WebApp) -> String;
}

// ========================
// Init Data
// ========================

/// Telegram user as reported in the (unverified) init data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
}

/// The `initDataUnsafe` object, reduced to what the view reads.
///
/// Fields are unverified and must not be trusted for anything beyond display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitDataUnsafe {
    /// Value of the `startapp` / `start_param` link parameter
    pub start_param: Option<String>,
    pub user: Option<WebAppUser>,
}

impl WebApp {
    /// Read and deserialize `initDataUnsafe`
    pub fn init_data_unsafe(&self) -> Result<InitDataUnsafe, String> {
        let raw = self.init_data_unsafe_raw();
        if raw.is_undefined() || raw.is_null() {
            return Ok(InitDataUnsafe::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())
    }
}

// ========================
// Lookup
// ========================

/// Get `window.Telegram.WebApp`, or `None` when the page was not opened
/// inside a Telegram client (or the SDK script failed to load).
pub fn web_app() -> Option<WebApp> {
    let window = web_sys::window()?;
    let telegram = lookup(&window, "Telegram")?;
    let app = lookup(&telegram, "WebApp")?;
    Some(app.unchecked_into::<WebApp>())
}

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}
