//! Crate-wide error type.
//!
//! DOM setup functions keep returning `Result<(), JsValue>` so they compose
//! with the wasm-bindgen entry point; the conversions below let them use `?`
//! on either error flavour.

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A DOM element the handler depends on is not on the page.
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    /// A JS exception surfaced through web-sys.
    #[error("javascript error: {0}")]
    Js(String),

    /// The server answered with a non-2xx status.
    #[error("bad status {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a rejected fetch promise.
    pub fn network(value: JsValue) -> Self {
        Error::Network(describe(&value))
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(describe(&value))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort human readable form of an arbitrary JS value.
fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_the_console_line() {
        let err = Error::Status { status: 500, status_text: "Internal Server Error".into() };
        assert_eq!(err.to_string(), "bad status 500 Internal Server Error");
    }

    #[test]
    fn missing_element_names_the_anchor() {
        assert_eq!(Error::MissingElement("#links").to_string(), "element not found: #links");
    }
}
