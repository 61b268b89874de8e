//! Session record lookup.
//!
//! The record is written by the login flow under a single storage key. Any
//! JSON value other than `null` counts as a live session; `token` and
//! `expiresAt` are picked out when present but not checked, validity is the
//! server's call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::host::Storage;

/// Parsed session record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<Value>,
    pub expires_at: Option<Value>,
}

impl Session {
    /// Build a session from a parsed record. `null` has no fields to read and
    /// is rejected; any other value is accepted.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        Some(Self {
            token: value.get("token").cloned(),
            expires_at: value.get("expiresAt").cloned(),
        })
    }
}

/// Login state inferred from local storage.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// No record stored.
    Missing,
    /// A record was stored but was not JSON, or was `null`. It has been removed.
    Invalid,
    Active(Session),
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Read the session record under `key`, deleting it if it is corrupt.
#[must_use]
pub fn read<S: Storage>(storage: &S, key: &str) -> SessionState {
    let json = match storage.get_item(key) {
        Ok(Some(json)) if !json.is_empty() => json,
        Ok(_) => return SessionState::Missing,
        Err(e) => {
            log::warn!("cannot read {key} from localStorage: {e}");
            return SessionState::Missing;
        }
    };

    let parsed = serde_json::from_str::<Value>(&json)
        .map_err(|e| e.to_string())
        .and_then(|value| Session::from_value(&value).ok_or_else(|| "session record is null".to_owned()));

    match parsed {
        Ok(session) => SessionState::Active(session),
        Err(e) => {
            log::debug!("{e}");
            log::warn!("{key} invalid, deleting from localStorage");
            if let Err(e) = storage.remove_item(key) {
                log::warn!("cannot delete {key} from localStorage: {e}");
            }
            SessionState::Invalid
        }
    }
}
