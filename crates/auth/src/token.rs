//! Unverified token decoding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

use crate::Claims;

/// Failure to read a claim set out of a raw token string.
///
/// Malformed tokens are expected input (first visit, corrupted storage), so
/// every caller handles this error; none surface it to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),

    #[error("payload segment is not valid base64url: {0}")]
    PayloadEncoding(String),

    #[error("payload is not a valid claim set: {0}")]
    ClaimSet(String),
}

/// Decode the claim set from a compact three-segment token.
///
/// Reads the payload segment only and does **not** verify the signature.
/// Verification is intentionally outside this crate: the token originated
/// from a separately-secured login exchange, and the server re-checks
/// authorization on every API call. This decoder exists so each navigation
/// can make an instant allow/deny decision.
///
/// Pure function of its input; no side effects.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| DecodeError::PayloadEncoding(e.to_string()))?;

    serde_json::from_slice(&payload).map_err(|e| DecodeError::ClaimSet(e.to_string()))
}
