//! # ddns-web
//!
//! WASM bootstrap for the DDNS service's web page. On load it shows the
//! build version linked to its source commit, registers the `login-links`
//! custom element that lists the OAuth2 providers, and shows that element
//! unless the browser already holds a session record.
//!
//! The logic is written against the capability traits in [`host`] so it can
//! be tested without a browser; [`host::web`] (feature `hydrate`) binds those
//! traits to `web-sys` and `gloo-net`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | One-time initialization: [`bootstrap::start`] |
//! | [`config`] | [`config::BootConfig`] and its defaults |
//! | [`host`] | Browser capability traits and the [`host::Host`] bundle |
//! | [`login_links`] | The `login-links` custom element |
//! | [`providers`] | OAuth2 provider descriptors |
//! | [`session`] | Session record lookup and [`session::SessionState`] |
//! | [`version`] | Version display and commit links |

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod host;
pub mod login_links;
pub mod providers;
pub mod session;
pub mod version;

pub use config::BootConfig;
pub use error::Error;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Boot the page with the default configuration.
///
/// # Errors
///
/// Returns the error message if the bootstrap cannot start.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    run(BootConfig::default())
}

/// Boot the page with a JSON [`BootConfig`]; unspecified keys keep their defaults.
///
/// # Errors
///
/// Returns the error message if the config is invalid or the bootstrap
/// cannot start.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn boot_with_config(config: &str) -> Result<(), JsValue> {
    let config = BootConfig::from_json(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(config)
}

#[cfg(feature = "hydrate")]
fn run(config: BootConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        log::debug!("console logger already installed: {e}");
    }

    let host = host::web::browser_host().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (version, result) = match bootstrap::start(&host, &config) {
        Ok(started) => (started.version, Ok(())),
        Err(aborted) => (aborted.version, Err(JsValue::from_str(&aborted.error.to_string()))),
    };

    wasm_bindgen_futures::spawn_local(async move {
        match version.await {
            Ok(version) => log::debug!("version {version}"),
            Err(e) => log::error!("version: {e}"),
        }
    });
    result
}
