//! User role - capability tag gating coach-only operations
//!
//! A user starts as `User` and is promoted to `Coach` exactly once by an
//! administrative action. There is no transition back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to a user account
///
/// Stored as VARCHAR in the database, serialized in SCREAMING_CASE to match
/// the wire format (`"USER"` / `"COACH"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Coach,
}

impl UserRole {
    /// Database / wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Coach => "COACH",
        }
    }

    /// Check whether this role grants coach capabilities
    #[inline]
    #[must_use]
    pub fn is_coach(&self) -> bool {
        matches!(self, Self::Coach)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown user role: {0}")]
pub struct UserRoleParseError(pub String);

impl FromStr for UserRole {
    type Err = UserRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "COACH" => Ok(Self::Coach),
            other => Err(UserRoleParseError(other.to_string())),
        }
    }
}
