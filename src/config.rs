//! Boot configuration.
//!
//! Every field has a default matching the page template the bootstrap ships
//! with, so `boot()` needs no configuration at all. Hosts that serve the
//! page under a different layout pass a JSON object to `boot_with_config`
//! naming only the keys they change.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::Error;

/// Static resource holding the build's version identifier.
pub const VERSION_URL: &str = "version.txt";

/// Endpoint listing the OAuth2 login providers.
pub const PROVIDERS_URL: &str = "/oauth2/providers";

/// Local storage key holding the session record.
pub const SESSION_KEY: &str = "session";

/// Tag name of the login links custom element.
pub const LOGIN_ELEMENT: &str = "login-links";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootConfig {
    pub version_url: String,
    pub providers_url: String,
    pub session_key: String,
    pub login_element: String,
    /// Anchors that display the version and link to its commit.
    pub commit_selector: String,
    /// `<link>` whose `href` is the source repository base URL.
    pub source_link_selector: String,
    /// Containers that receive the login element when logged out.
    pub main_selector: String,
    pub log_level: log::Level,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            version_url: VERSION_URL.to_owned(),
            providers_url: PROVIDERS_URL.to_owned(),
            session_key: SESSION_KEY.to_owned(),
            login_element: LOGIN_ELEMENT.to_owned(),
            commit_selector: "a#commit".to_owned(),
            source_link_selector: r#"link#source[rel="help"]"#.to_owned(),
            main_selector: "main".to_owned(),
            log_level: log::Level::Debug,
        }
    }
}

impl BootConfig {
    /// Parse a JSON object, filling unspecified keys from [`BootConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `json` is not an object of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::Config)
    }
}
