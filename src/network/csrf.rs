//! CSRF token lookup.  Django drops the token into a readable cookie; every
//! state-changing request echoes it back in the `X-CSRFToken` header.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::constants::CSRF_COOKIE_NAME;

/// Extract cookie `name` from a `document.cookie` style string.
/// Returns an empty string when the cookie is absent.
pub fn token_from_cookies(cookies: &str, name: &str) -> String {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
        .unwrap_or_default()
}

/// Read the CSRF token from the live document.  Empty when cookies are not
/// accessible (sandboxed iframe, non-HTML document).
pub fn current_token() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .map(|c| token_from_cookies(&c, CSRF_COOKIE_NAME))
        .unwrap_or_default()
}
