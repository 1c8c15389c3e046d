//! Password wrapper that keeps credentials out of logs

use std::fmt;

use serde::{Serialize, Serializer};
use zeroize::Zeroize;

/// Account password held for the lifetime of a client.
///
/// Redacted in `Debug` and `Display`, zeroed on drop. The raw value is only
/// reachable through [`Password::expose`] and the login body serializer.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Wrap a raw password.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value (use sparingly).
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

// Serialized only as part of the login request body.
impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let password = Password::new("hunter2");
        let debug = format!("{password:?}");
        assert_eq!(debug, "[REDACTED]");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn display_is_redacted() {
        let password = Password::new("hunter2");
        assert_eq!(format!("{password}"), "[REDACTED]");
    }

    #[test]
    fn expose_returns_raw_value() {
        let password = Password::new("hunter2");
        assert_eq!(password.expose(), "hunter2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let password = Password::new("hunter2");
        let json = serde_json::to_string(&password).unwrap();
        assert_eq!(json, r#""hunter2""#);
    }
}
