//! Session-managing client for the hub HTTP API
//!
//! Authenticates with username/password against the hub's login endpoint,
//! caches the returned bearer token, and transparently logs in again once the
//! token expires. Refreshes are serialized behind a single lock so concurrent
//! callers never interleave login exchanges.
//!
//! Call flow:
//! 1. Consumer builds a [`Config`] (directly or via [`Config::from_env`])
//! 2. [`HubClient::new`] builds the shared HTTP transport
//! 3. [`HubClient::send`] ensures a valid token, attaches it, dispatches the
//!    request, classifies the response, and decodes the body
//!
//! Resource-specific wrappers (repositories, org settings, and so on) live
//! with the consumer; this crate provides only the authenticated transport.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod secret;

mod jwt;
mod session;

pub use client::HubClient;
pub use config::Config;
pub use error::{Error, Result};
pub use secret::Password;

// Re-exported so consumers don't need a direct reqwest dependency to name
// request methods.
pub use reqwest::Method;
