//! Bearer token expiry extraction
//!
//! The hub issues standard three-segment JWTs. Only the payload's numeric
//! `exp` claim is consumed. The signature is deliberately not verified: the
//! token arrived over TLS in exchange for valid credentials, and the server's
//! signing key is not available client-side anyway.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{Error, Result};

/// Extract the expiration instant from a JWT without verifying its signature.
///
/// Structural problems (segment count, base64, JSON) are [`Error::TokenParse`];
/// an absent or non-numeric `exp` claim is [`Error::MissingExpiry`].
pub(crate) fn expiration(token: &str) -> Result<SystemTime> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(Error::TokenParse(format!(
            "token must have 3 segments, got {}",
            segments.len()
        )));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| Error::TokenParse(format!("token payload is not valid base64url: {e}")))?;
    let claims: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| Error::TokenParse(format!("token payload is not valid JSON: {e}")))?;

    // `exp` is NumericDate: seconds since the epoch, integer or fractional.
    match claims.get("exp").and_then(serde_json::Value::as_f64) {
        Some(exp) => Ok(UNIX_EPOCH + Duration::from_secs(exp as u64)),
        None => Err(Error::MissingExpiry),
    }
}
