//! Date Formatting

use wasm_bindgen::JsValue;

/// Format an epoch-millisecond timestamp as the browser's locale date
pub fn format_epoch(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}
