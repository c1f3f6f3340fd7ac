//! Small crate-wide convenience macros.
//!
//! Every listener in this crate reports through the browser console.  These
//! wrappers keep the `web_sys::console::*_1(&format!(…).into())` boilerplate
//! out of the handler bodies.

/// `console.log` with `format!` arguments.
///
/// ```rust,ignore
/// console_log!("attached {} rows", rows.len());
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    };
}

/// `console.warn` with `format!` arguments.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

/// `console.error` with `format!` arguments.
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        web_sys::console::error_1(&format!($($arg)*).into())
    };
}

/// Debug-only `console.debug`.  Compiles to nothing in release builds so the
/// configuration chatter never reaches production consoles.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            web_sys::console::debug_1(&format!($($arg)*).into());
        }
    }};
}
