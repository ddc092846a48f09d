//! Small reads of window state.

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Platform colour-scheme hint; `false` when it cannot be queried.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.)
        .unwrap_or(1.)
}

/// `(innerWidth, innerHeight)` in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0., 0.);
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Wall clock in ms since the epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.) as u64
}

pub fn document_hidden() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .is_some_and(|document| document.visibility_state() == web_sys::VisibilityState::Hidden)
}
