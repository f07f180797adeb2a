//! The password the gate compares against.
//!
//! The secret is opaque to the rest of the core: it can be checked but
//! never printed. `Debug` is redacted so a stray `{:?}` in a log line
//! does not leak it.

use std::fmt;

/// Historic default used when nothing is configured.
pub const DEFAULT_SECRET: &str = "123456";

#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True when `attempt` is exactly the configured secret.
    pub fn matches(&self, attempt: &str) -> bool {
        self.0 == attempt
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_only() {
        let secret = Secret::new("hunter2");
        assert!(secret.matches("hunter2"));
        assert!(!secret.matches("hunter"));
        assert!(!secret.matches("hunter22"));
        assert!(!secret.matches(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret::new("hunter2");
        assert_eq!(format!("{:?}", secret), "Secret(***)");
    }
}
