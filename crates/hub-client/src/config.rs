//! Client construction settings
//!
//! Settings come either directly from the consumer or from environment
//! variables. The password is wrapped in [`Password`] as soon as it enters
//! the process so it never reaches logs via `Debug`.

use crate::constants::{DEFAULT_HOST, DEFAULT_USER_AGENT_VERSION, USER_AGENT_PRODUCT};
use crate::error::{Error, Result};
use crate::secret::Password;

/// Settings for building a [`crate::HubClient`].
#[derive(Debug)]
pub struct Config {
    /// Base API host, e.g. `https://hub.docker.com/v2`. Request paths are
    /// appended verbatim.
    pub host: String,
    pub username: String,
    pub password: Password,
    /// Version tag embedded in the `User-Agent` header. Defaults to the
    /// `dev` sentinel when unset.
    pub user_agent_version: Option<String>,
}

impl Config {
    /// Settings for the default public host.
    pub fn new(username: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            username: username.into(),
            password: password.into(),
            user_agent_version: None,
        }
    }

    /// Read settings from the environment.
    ///
    /// `HUB_USERNAME` and `HUB_PASSWORD` are required; `HUB_HOST` falls back
    /// to the default public host and `HUB_USER_AGENT_VERSION` to the `dev`
    /// sentinel.
    pub fn from_env() -> Result<Self> {
        let username = std::env::var("HUB_USERNAME")
            .map_err(|_| Error::Config("HUB_USERNAME is not set".into()))?;
        let password = std::env::var("HUB_PASSWORD")
            .map_err(|_| Error::Config("HUB_PASSWORD is not set".into()))?;

        Ok(Self {
            host: std::env::var("HUB_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            username,
            password: Password::new(password),
            user_agent_version: std::env::var("HUB_USER_AGENT_VERSION").ok(),
        })
    }

    /// Validate settings before a client is built from them.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(Error::Config(format!(
                "host must start with http:// or https://, got: {}",
                self.host
            )));
        }
        if self.username.is_empty() {
            return Err(Error::Config("username must not be empty".into()));
        }
        Ok(())
    }

    /// Full `User-Agent` value for outgoing requests.
    pub(crate) fn user_agent(&self) -> String {
        let version = self
            .user_agent_version
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT_VERSION);
        format!("{USER_AGENT_PRODUCT}/{version}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that mutate environment variables, preventing
    /// data races when tests run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// SAFETY: Callers must hold ENV_MUTEX to prevent concurrent env mutation.
    unsafe fn set_env(key: &str, val: &str) {
        unsafe { std::env::set_var(key, val) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn clear_hub_env() {
        unsafe {
            remove_env("HUB_HOST");
            remove_env("HUB_USERNAME");
            remove_env("HUB_PASSWORD");
            remove_env("HUB_USER_AGENT_VERSION");
        }
    }

    #[test]
    fn new_uses_default_host_and_sentinel_version() {
        let config = Config::new("alice", "hunter2");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.user_agent(), "hub-client/dev");
        config.validate().unwrap();
    }

    #[test]
    fn user_agent_embeds_configured_version() {
        let mut config = Config::new("alice", "hunter2");
        config.user_agent_version = Some("3.2.1".into());
        assert_eq!(config.user_agent(), "hub-client/3.2.1");
    }

    #[test]
    fn from_env_reads_all_variables() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe {
            clear_hub_env();
            set_env("HUB_HOST", "https://hub.example.com/v2");
            set_env("HUB_USERNAME", "alice");
            set_env("HUB_PASSWORD", "hunter2");
            set_env("HUB_USER_AGENT_VERSION", "9.9.9");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "https://hub.example.com/v2");
        assert_eq!(config.username, "alice");
        assert_eq!(config.password.expose(), "hunter2");
        assert_eq!(config.user_agent(), "hub-client/9.9.9");

        unsafe { clear_hub_env() };
    }

    #[test]
    fn from_env_defaults_host() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe {
            clear_hub_env();
            set_env("HUB_USERNAME", "alice");
            set_env("HUB_PASSWORD", "hunter2");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.user_agent(), "hub-client/dev");

        unsafe { clear_hub_env() };
    }

    #[test]
    fn from_env_requires_username() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe {
            clear_hub_env();
            set_env("HUB_PASSWORD", "hunter2");
        }

        let err = Config::from_env().unwrap_err();
        assert!(
            err.to_string().contains("HUB_USERNAME"),
            "error must name the missing variable, got: {err}"
        );

        unsafe { clear_hub_env() };
    }

    #[test]
    fn from_env_requires_password() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe {
            clear_hub_env();
            set_env("HUB_USERNAME", "alice");
        }

        let err = Config::from_env().unwrap_err();
        assert!(
            err.to_string().contains("HUB_PASSWORD"),
            "error must name the missing variable, got: {err}"
        );

        unsafe { clear_hub_env() };
    }

    #[test]
    fn validate_rejects_host_without_scheme() {
        let mut config = Config::new("alice", "hunter2");
        config.host = "hub.example.com".into();

        let err = config.validate().unwrap_err();
        assert!(
            err.to_string().contains("http"),
            "error should explain the issue, got: {err}"
        );
    }

    #[test]
    fn validate_rejects_empty_username() {
        let config = Config::new("", "hunter2");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_does_not_leak_password() {
        let config = Config::new("alice", "hunter2");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"), "got: {debug}");
        assert!(debug.contains("[REDACTED]"));
    }
}
