//! Crate error type.
//!
//! Browser exceptions (`JsValue`) are flattened to strings at the
//! [`crate::host::web`] boundary so the core stays free of `wasm-bindgen`
//! types and can be tested natively.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("fetch {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid provider list: {0}")]
    Providers(#[source] serde_json::Error),

    #[error("invalid boot config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("custom element <{0}> is already defined")]
    AlreadyDefined(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("local storage unavailable: {0}")]
    Storage(String),
}
