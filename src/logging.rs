//! Console Logging
//!
//! Routes the `log` facade to the browser console.

use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn init(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", err).into());
    }
}

/// Log a message followed by the raw browser value, so devtools shows the live object
pub fn log_value(label: &str, value: &JsValue) {
    web_sys::console::log_2(&JsValue::from_str(label), value);
}

/// Log a record as a plain JS object (falls back to its JSON text)
pub fn log_record<T: Serialize>(label: &str, record: &T) {
    match serde_wasm_bindgen::to_value(record) {
        Ok(value) => log_value(label, &value),
        Err(_) => log::info!("{} {}", label, serde_json::to_string(record).unwrap_or_default()),
    }
}
