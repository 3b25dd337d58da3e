//! Wire DTOs exchanged with the remote user API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated identity as stored by the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Display name; the avatar shows its first character.
    pub username: String,
    /// Whether the account finished email verification.
    #[serde(default)]
    pub is_verified: bool,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract a non-blank `message` from a raw error body, if it is JSON.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.trim().is_empty())
}
