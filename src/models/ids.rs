//! Strongly-typed session identifier
//!
//! Each wizard session gets a fresh id so log lines from one run of the
//! flow can be told apart from the next one after a restart.

use std::fmt;
use uuid::Uuid;

/// Identifies one wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    const PREFIX: &'static str = "ses-";

    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, &self.0.to_string()[..8])
    }
}
