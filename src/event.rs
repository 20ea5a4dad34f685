//! Event catalog: the closed set of analytics events the application emits.
//!
//! Each variant carries exactly the payload its backend record needs.
//! The wire encoding lives in [`crate::codec`]; this module is the data
//! model only.

use serde::{Deserialize, Serialize};

/// A discrete, named occurrence to be recorded for analysis.
///
/// The set is closed on purpose: every consumer matches exhaustively,
/// so adding a variant forces the codec to be updated before the crate
/// compiles again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnalyticsEvent {
    LoginScreenViewed,
    LoginAttempted,
    LoginFailed { reason: LoginFailureReason },
    LoginSucceeded,
    MessageListViewed,
    /// A message was opened from the list. `index` is the list position.
    MessageSelected { index: i64 },
    /// A message was deleted. `index` is its list position, `read`
    /// whether it had been opened before deletion.
    MessageDeleted { index: i64, read: bool },
}

/// Why a login attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginFailureReason {
    WrongPassword,
    UserDoesNotExist,
    UserNotActivated,
}

impl LoginFailureReason {
    /// Stable wire identifier. Pinned by hand rather than derived from
    /// the Rust name so a rename cannot silently change recorded data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WrongPassword => "wrongPassword",
            Self::UserDoesNotExist => "userDoesNotExist",
            Self::UserNotActivated => "userNotActivated",
        }
    }
}

impl std::fmt::Display for LoginFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
