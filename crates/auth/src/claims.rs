use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use schoolgate_core::{AccountId, TeacherId};

use crate::RoleClaim;

/// Decoded session claim set (transport-agnostic).
///
/// This is the minimal set of claims the front end expects once a token has
/// been decoded. The token was signed during the login exchange, and the
/// server re-authorizes every API call regardless of what this layer decides;
/// the claim set exists so navigation can be decided instantly, offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / account identifier.
    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<AccountId>,

    /// Role granted to the account.
    pub role: RoleClaim,

    /// Issued-at timestamp.
    #[serde(
        rename = "iat",
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub issued_at: Option<DateTime<Utc>>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,

    /// Teacher record the account is linked to, if any. Consumed downstream
    /// (grading, scheduling); the guard layer never inspects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
}

impl Claims {
    /// Whether the claim set has expired at `now`.
    ///
    /// Validity requires `expires_at` strictly in the future; a token expiring
    /// exactly at `now` is already expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
