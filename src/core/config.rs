//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin the site is served under, used in startup logging.
    /// Example: https://stratus.dev
    pub public_origin: Option<String>,

    /// Contact address the server advertises at startup.
    pub support_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_origin: std::env::var("PUBLIC_ORIGIN").ok(),
            support_email: std::env::var("SUPPORT_EMAIL").ok(),
        }
    }

    /// Check if a public origin is configured
    pub fn has_public_origin(&self) -> bool {
        self.public_origin.is_some()
    }

    /// Check if a support email is configured
    pub fn has_support_email(&self) -> bool {
        self.support_email.is_some()
    }

    /// Get the public origin, falling back to the local dev address
    pub fn public_origin_or_default(&self) -> &str {
        self.public_origin.as_deref().unwrap_or("http://127.0.0.1:3000")
    }

    /// Get the support email, falling back to the published address
    pub fn support_email_or_default(&self) -> &str {
        self.support_email.as_deref().unwrap_or("hello@stratus.dev")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            public_origin: Some("https://stratus.dev".to_string()),
            support_email: Some("hello@stratus.dev".to_string()),
        };

        assert_eq!(config.public_origin, Some("https://stratus.dev".to_string()));
        assert_eq!(config.support_email, Some("hello@stratus.dev".to_string()));
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            public_origin: None,
            support_email: None,
        };

        assert!(config.public_origin.is_none());
        assert!(config.support_email.is_none());
    }

    #[test]
    fn test_has_public_origin() {
        let config_with = Config {
            public_origin: Some("https://stratus.dev".to_string()),
            support_email: None,
        };
        let config_without = Config {
            public_origin: None,
            support_email: None,
        };

        assert!(config_with.has_public_origin());
        assert!(!config_without.has_public_origin());
    }

    #[test]
    fn test_has_support_email() {
        let config_with = Config {
            public_origin: None,
            support_email: Some("team@example.com".to_string()),
        };
        let config_without = Config {
            public_origin: None,
            support_email: None,
        };

        assert!(config_with.has_support_email());
        assert!(!config_without.has_support_email());
    }

    #[test]
    fn test_public_origin_or_default_configured() {
        let config = Config {
            public_origin: Some("https://stratus.dev".to_string()),
            support_email: None,
        };

        assert_eq!(config.public_origin_or_default(), "https://stratus.dev");
    }

    #[test]
    fn test_public_origin_or_default_fallback() {
        let config = Config {
            public_origin: None,
            support_email: None,
        };

        assert_eq!(config.public_origin_or_default(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_support_email_or_default_configured() {
        let config = Config {
            public_origin: None,
            support_email: Some("team@example.com".to_string()),
        };

        assert_eq!(config.support_email_or_default(), "team@example.com");
    }

    #[test]
    fn test_support_email_or_default_fallback() {
        let config = Config {
            public_origin: None,
            support_email: None,
        };

        assert_eq!(config.support_email_or_default(), "hello@stratus.dev");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Just verify from_env() returns a Config without errors
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        let _ = config.has_public_origin();
        let _ = config.has_support_email();
    }

    #[test]
    fn test_config_default_calls_from_env() {
        let config = Config::default();

        let _ = config.has_public_origin();
        let _ = config.has_support_email();
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            public_origin: Some("https://stratus.dev".to_string()),
            support_email: Some("hello@stratus.dev".to_string()),
        };

        let cloned = config.clone();

        assert_eq!(config.public_origin, cloned.public_origin);
        assert_eq!(config.support_email, cloned.support_email);
    }

    #[test]
    fn test_config_with_empty_string_values() {
        // Empty strings are Some(""), not None, and still count as configured
        let config = Config {
            public_origin: Some("".to_string()),
            support_email: Some("".to_string()),
        };

        assert!(config.has_public_origin());
        assert!(config.has_support_email());
        assert_eq!(config.public_origin_or_default(), "");
    }
}
