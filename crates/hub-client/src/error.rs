//! Error types for hub client operations

use reqwest::StatusCode;

/// Errors from session management and request dispatch.
///
/// Nothing here is retried by this crate: every failure returns to the caller
/// immediately, and the client stays usable afterwards (an unauthenticated
/// session simply retries the login exchange on the next call).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client construction or configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Request construction or transport failure (connection refused, DNS,
    /// timeout, cancellation).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The login endpoint rejected the credential exchange.
    #[error("login failed: {0}")]
    Login(String),

    /// The login response body or the token inside it could not be parsed.
    #[error("token parse error: {0}")]
    TokenParse(String),

    /// The token payload carries no numeric `exp` claim.
    #[error("could not find expiration in token")]
    MissingExpiry,

    /// An authenticated call returned a non-success status. Displays the raw
    /// response body; callers depend on the server's diagnostic text.
    #[error("{body}")]
    Api { status: StatusCode, body: String },

    /// A success-status response body failed JSON decoding. Distinct from
    /// [`Error::Api`]: the HTTP layer considered the call successful.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result alias for hub client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_raw_body_only() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            body: r#"{"message":"not found"}"#.into(),
        };
        assert_eq!(err.to_string(), r#"{"message":"not found"}"#);
    }

    #[test]
    fn missing_expiry_message_is_stable() {
        assert_eq!(
            Error::MissingExpiry.to_string(),
            "could not find expiration in token"
        );
    }

    #[test]
    fn login_error_carries_status_line() {
        let err = Error::Login("login endpoint returned 401 Unauthorized".into());
        assert!(err.to_string().contains("401 Unauthorized"), "got: {err}");
    }
}
