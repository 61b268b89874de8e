//! OAuth2 provider descriptors served by `/oauth2/providers`.

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use serde::Deserialize;

use crate::error::Error;
use crate::host::Fetch;

/// One login option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Provider {
    pub id: String,
    pub title: String,
    /// Where the browser goes to start the provider's login flow.
    pub href: String,
    /// Icon image URL.
    pub icon: String,
}

/// Parse the provider list body.
///
/// # Errors
///
/// Returns [`Error::Providers`] if `json` is not an array of descriptors.
pub fn parse(json: &str) -> Result<Vec<Provider>, Error> {
    serde_json::from_str(json).map_err(Error::Providers)
}

/// Fetch and parse the provider list.
///
/// # Errors
///
/// Propagates fetch errors and [`Error::Providers`].
pub async fn fetch<F: Fetch>(fetch: &F, url: &str) -> Result<Vec<Provider>, Error> {
    let body = fetch.get_text(url).await?;
    parse(&body)
}
