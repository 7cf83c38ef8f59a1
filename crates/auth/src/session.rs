use chrono::{DateTime, Utc};

use crate::{Claims, DecodeError, RoleClaim, token};

/// Outcome of evaluating the stored token at a point in time.
///
/// Evaluation is pure and recomputed per navigation; nothing is cached across
/// evaluations. Scrubbing an unusable token is an explicit, separate step
/// owned by the session manager, never a hidden side effect of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Token decoded and not yet expired.
    Valid(Claims),
    /// Token decoded but `expires_at` has passed.
    Expired,
    /// Token present but unreadable.
    Malformed(DecodeError),
    /// No token stored.
    Absent,
}

impl SessionStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, SessionStatus::Valid(_))
    }

    /// Whether a token is present but can never become valid again.
    pub fn needs_scrub(&self) -> bool {
        matches!(self, SessionStatus::Expired | SessionStatus::Malformed(_))
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            SessionStatus::Valid(claims) => Some(claims),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<&RoleClaim> {
        self.claims().map(|claims| &claims.role)
    }
}

/// Deterministically evaluate a stored token.
///
/// Validity requires a decodable claim set whose `expires_at` is strictly
/// after `now`. Decode failure maps to `Malformed` rather than an error:
/// it is expected input, and callers route it to the login screen exactly
/// like an absent session.
pub fn evaluate_session(raw_token: Option<&str>, now: DateTime<Utc>) -> SessionStatus {
    let Some(raw) = raw_token else {
        return SessionStatus::Absent;
    };

    match token::decode(raw) {
        Ok(claims) if claims.is_expired(now) => SessionStatus::Expired,
        Ok(claims) => SessionStatus::Valid(claims),
        Err(err) => SessionStatus::Malformed(err),
    }
}
