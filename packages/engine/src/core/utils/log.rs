//! Console logging macros
//!
//! On `wasm32` these forward to the browser console through `web_sys::console`.
//! On native targets (unit tests, benches) they compile to nothing: calling a
//! wasm-bindgen import outside of a JS host aborts, so the arguments are only
//! type-checked.
//!
//! Usage:
//! ```rust
//! use appledrop_engine::console_log;
//!
//! let count = 25;
//! console_log!("spawned {} apples", count);
//! ```

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.error` with `format!` arguments
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::error_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
