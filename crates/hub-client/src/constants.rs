//! Hub API constants
//!
//! Endpoint and identity constants shared by the session manager and the
//! request dispatcher. None of these are secrets — the credentials themselves
//! live in [`crate::config::Config`].

use std::time::Duration;

/// Default public API host, used when no host is configured.
pub const DEFAULT_HOST: &str = "https://hub.docker.com/v2";

/// Login endpoint path, appended to the configured host.
pub const LOGIN_PATH: &str = "/users/login/";

/// Product name embedded in the `User-Agent` header.
pub const USER_AGENT_PRODUCT: &str = "hub-client";

/// Sentinel version tag used when the consumer does not supply one.
pub const DEFAULT_USER_AGENT_VERSION: &str = "dev";

/// Timeout applied to every request on the shared HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
