//! Error type for the browser runtime.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type alias using `WebError`.
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors raised while wiring features into the page.
#[derive(Error, Debug)]
pub enum WebError {
    /// A browser API the feature relies on is missing.
    #[error("Browser API unavailable: {0}")]
    Unavailable(&'static str),

    /// A JavaScript exception surfaced through web-sys.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Fetching a resource failed.
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered with a non-success status.
    #[error("Failed to load {url}: HTTP {status}")]
    Http { url: String, status: u16 },

    /// Core logic error.
    #[error(transparent)]
    Core(#[from] lingyan_core::CoreError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        WebError::Js(message)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
