use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Whether the learner API accepts cross-origin requests from anywhere (default: true)
    pub cors_allow_any_origin: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `CORS_ALLOW_ANY_ORIGIN` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        Self {
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cors_allow_any_origin: env::var("CORS_ALLOW_ANY_ORIGIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
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

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            cors_allow_any_origin: true,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
        env::remove_var("CORS_ALLOW_ANY_ORIGIN");

        let config = Config::from_env();

        assert_eq!(config.request_timeout_seconds, 10);
        assert!(config.cors_allow_any_origin);
    }
}
