//! Authenticated request dispatch
//!
//! Builds and sends one API request at a time: ensure a valid bearer token,
//! attach identity headers, issue the request, classify the status, decode
//! the body. No retries and no queuing — a transport or API failure returns
//! immediately and the next call starts fresh.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::constants::REQUEST_TIMEOUT;
use crate::error::{Error, Result};
use crate::session::{Credentials, SessionManager};

/// Whether a response status counts as success. Everything in `[200, 400)`
/// is accepted, including redirect codes the transport did not follow.
pub(crate) fn status_accepted(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Session-managing hub API client.
///
/// Holds fixed credentials and identity for one logical session and shares
/// one HTTP transport across all calls. Safe to share across tasks behind
/// `&self` or an `Arc`; the only mutable state is the cached session, which
/// the session manager guards with its own lock.
///
/// Cancellation follows the caller: dropping a call's future aborts the
/// in-flight I/O without touching the cached session.
#[derive(Debug)]
pub struct HubClient {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    session: SessionManager,
}

impl HubClient {
    /// Build a client from settings.
    ///
    /// The HTTP transport carries a 60 second timeout on every request.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("building HTTP client: {e}")))?;

        let user_agent = config.user_agent();
        let session = SessionManager::new(
            &config.host,
            Credentials {
                username: config.username,
                password: config.password,
            },
        );

        Ok(Self {
            http,
            base_url: config.host,
            user_agent,
            session,
        })
    }

    /// Send an authenticated request and decode the JSON response into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let response = self.dispatch(method, path, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| Error::Decode(format!("decoding response body: {e}")))
    }

    /// Send an authenticated request, ignoring any response body.
    pub async fn send_unit(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<()> {
        self.dispatch(method, path, body).await.map(drop)
    }

    /// Ensure a token, issue the request, and classify the response.
    ///
    /// On a non-success status the whole body is read and returned verbatim
    /// as the error text — callers depend on the server's diagnostics.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let token = self.session.bearer_token(&self.http).await?;

        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .bearer_auth(&token);
        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Http(format!("request failed: {e}")))?;

        let status = response.status();
        if !status_accepted(status) {
            let body = response
                .text()
                .await
                .map_err(|e| Error::Http(format!("reading error response body: {e}")))?;
            return Err(Error::Api { status, body });
        }

        Ok(response)
    }
}
