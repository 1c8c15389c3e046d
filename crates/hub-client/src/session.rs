//! Login exchange and session cache
//!
//! Owns the credential pair and the cached bearer token with its expiry. The
//! whole check-or-refresh sequence runs under one tokio Mutex, including the
//! login round trip, so concurrent callers never interleave exchanges. A
//! failed exchange leaves the previous session untouched; the next call
//! simply retries the login.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::client::status_accepted;
use crate::constants::LOGIN_PATH;
use crate::error::{Error, Result};
use crate::jwt;
use crate::secret::Password;

/// Login request body.
#[derive(Debug, Serialize)]
pub(crate) struct Credentials {
    pub username: String,
    pub password: Password,
}

/// Login response body. The token is a standard three-segment JWT.
#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// A cached bearer token and the instant it stops being valid.
#[derive(Debug)]
struct Session {
    token: String,
    expires_at: SystemTime,
}

/// Serializes login exchanges and caches the resulting session.
///
/// One instance per [`crate::HubClient`]; the session is never shared across
/// client instances.
#[derive(Debug)]
pub(crate) struct SessionManager {
    credentials: Credentials,
    login_url: String,
    session: Mutex<Option<Session>>,
}

impl SessionManager {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self {
            credentials,
            login_url: format!("{base_url}{LOGIN_PATH}"),
            session: Mutex::new(None),
        }
    }

    /// Return a bearer token that is valid right now, performing a login
    /// exchange if the cached one is absent or expired.
    ///
    /// The session lock is held for the whole check-or-refresh sequence, so
    /// callers that arrive during a refresh wait and then reuse the fresh
    /// token instead of racing their own exchange.
    pub async fn bearer_token(&self, http: &reqwest::Client) -> Result<String> {
        let mut session = self.session.lock().await;

        if let Some(current) = session.as_ref() {
            if SystemTime::now() < current.expires_at {
                debug!("cached session still valid, skipping login");
                return Ok(current.token.clone());
            }
        }

        debug!(url = %self.login_url, "session absent or expired, logging in");

        let body = serde_json::to_vec(&self.credentials)
            .map_err(|e| Error::Config(format!("serializing credentials: {e}")))?;

        let response = http
            .post(&self.login_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("login request failed: {e}")))?;

        let status = response.status();
        if !status_accepted(status) {
            warn!(%status, "login rejected");
            return Err(Error::Login(format!("login endpoint returned {status}")));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::TokenParse(format!("invalid login response: {e}")))?;

        let expires_at = jwt::expiration(&token_response.token)?;

        info!(expires_at = ?expires_at, "session refreshed");
        *session = Some(Session {
            token: token_response.token.clone(),
            expires_at,
        });
        Ok(token_response.token)
    }
}
