//! One-time page initialization.
//!
//! `start` runs the three bootstrap steps in order: build the version task,
//! register the login element, then decide from the session record whether to
//! show login options. Neither asynchronous piece blocks the others; the
//! version task is handed back unawaited, on failure too, and element
//! population is driven by the registry.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::fmt;

use futures::FutureExt;

use crate::config::BootConfig;
use crate::error::Error;
use crate::host::{Document, ElementRegistry, Fetch, Host, Storage, Task};
use crate::login_links;
use crate::session::{self, SessionState};
use crate::version::{self, Targets};

/// Result of [`start`].
pub struct Started {
    pub session: SessionState,
    /// Fetches and displays the version. Resolves to the version shown.
    pub version: Task<String>,
}

impl fmt::Debug for Started {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Started").field("session", &self.session).finish_non_exhaustive()
    }
}

/// A [`start`] that stopped before the login check finished. The version
/// task was already built and still runs if driven.
pub struct Aborted {
    pub error: Error,
    pub version: Task<String>,
}

impl fmt::Debug for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aborted").field("error", &self.error).finish_non_exhaustive()
    }
}

/// Run the bootstrap against `host`.
///
/// # Errors
///
/// Returns [`Aborted`] if the login element cannot be registered (including
/// when it is already defined) or login options cannot be inserted.
pub fn start<D, F, S, R>(host: &Host<D, F, S, R>, config: &BootConfig) -> Result<Started, Aborted>
where
    D: Document,
    F: Fetch,
    S: Storage,
    R: ElementRegistry<Node = D::Node>,
{
    let targets = Targets {
        commit: config.commit_selector.clone(),
        source_link: config.source_link_selector.clone(),
    };
    let version = version::show(host.document.clone(), host.fetch.clone(), config.version_url.clone(), targets).boxed_local();

    match check_login(host, config) {
        Ok(session) => Ok(Started { session, version }),
        Err(error) => Err(Aborted { error, version }),
    }
}

fn check_login<D, F, S, R>(host: &Host<D, F, S, R>, config: &BootConfig) -> Result<SessionState, Error>
where
    D: Document,
    F: Fetch,
    S: Storage,
    R: ElementRegistry<Node = D::Node>,
{
    login_links::define(host, &config.login_element, &config.providers_url)?;

    let session = session::read(&host.storage, &config.session_key);
    if session.is_logged_in() {
        log::info!("Logged in, refreshing app data.");
    } else {
        log::debug!("Not logged in, showing login options.");
        show_login_options(&host.document, &config.main_selector, &config.login_element)?;
    }
    Ok(session)
}

/// Make a fresh `element` the only child of every node matching `containers`.
/// Returns how many containers were filled.
///
/// # Errors
///
/// Propagates DOM errors.
pub fn show_login_options<D: Document>(document: &D, containers: &str, element: &str) -> Result<usize, Error> {
    let containers = document.query_selector_all(containers)?;
    for container in &containers {
        let links = document.create_element(element)?;
        document.replace_children(container, &links)?;
    }
    Ok(containers.len())
}

/// Deep clone of the first element in `template#{id}`.
///
/// # Errors
///
/// Propagates DOM errors.
pub fn template<D: Document>(document: &D, id: &str) -> Result<Option<D::Node>, Error> {
    document.clone_template(id)
}
