//! Opaque identifiers for todo entities

use std::fmt;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of random characters appended to a generated id.
const SUFFIX_LEN: usize = 8;

/// Opaque unique identifier for a `Todo`.
///
/// Assigned at creation and immutable thereafter. Callers should treat the
/// inner representation as a pure key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap an existing identifier verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier: the current Unix timestamp in
    /// milliseconds plus a short random alphanumeric suffix.
    ///
    /// Probabilistically unique only. The scheme is not cryptographically
    /// strong and offers no collision guarantee.
    pub fn generate() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self(format!("{}-{}", Utc::now().timestamp_millis(), suffix))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
