//
//  mailerlite-rs
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Configuration
//!
//! The [`Config`] value holds everything the transport core needs to reach the
//! MailerLite API: the bearer token, the base path and a few HTTP client
//! settings. It is built once per [`MailerLite`](crate::MailerLite) instance,
//! wrapped in an `Arc`, and shared read-only by every resource façade.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use mailerlite::Config;
//!
//! let config = Config::new("my-api-key")
//!     .with_base_path("http://localhost:9090")
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(config.base_path, "http://localhost:9090");
//! ```
//!
//! ## Embedding in Application Configuration
//!
//! `Config` implements `Deserialize`, so it can be nested in a host
//! application's own configuration file. Only `api_key` is required:
//!
//! ```rust
//! use mailerlite::Config;
//!
//! let config: Config = serde_json::from_str(r#"{"api_key": "secret"}"#).unwrap();
//! assert_eq!(config.base_path, "https://connect.mailerlite.com");
//! ```

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Production origin of the MailerLite API.
pub const DEFAULT_BASE_PATH: &str = "https://connect.mailerlite.com";

/// Immutable configuration shared by all resource façades.
///
/// # Fields
///
/// * `api_key` - Opaque bearer token sent as `Authorization: Bearer <api_key>`
/// * `base_path` - Absolute URL prefix; endpoints such as `/api/subscribers` are appended verbatim
/// * `timeout` - Optional default timeout applied to every request
/// * `user_agent` - Value of the `User-Agent` header
///
/// # Notes
///
/// - The `Debug` implementation redacts the API key
/// - A trailing `/` on `base_path` is stripped by [`Config::validate`]
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Bearer token used to authenticate every request.
    pub api_key: String,

    /// Absolute URL prefix for all endpoints.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Default request timeout. `None` means no timeout beyond the
    /// underlying HTTP client's own behavior.
    #[serde(default, with = "timeout_secs")]
    pub timeout: Option<Duration>,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_user_agent() -> String {
    format!("mailerlite-rs/{}", crate::VERSION)
}

impl Config {
    /// Creates a configuration for the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_path: default_base_path(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Overrides the base path, e.g. to target a proxy or a local mock.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets a default timeout for every request made with this configuration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks the configuration and normalizes the base path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the API key is empty or the base
    /// path is not an absolute `http`/`https` URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailerlite::Config;
    ///
    /// let config = Config::new("key").with_base_path("https://example.com/").validate()?;
    /// assert_eq!(config.base_path, "https://example.com");
    ///
    /// assert!(Config::new("").validate().is_err());
    /// # Ok::<(), mailerlite::Error>(())
    /// ```
    pub fn validate(mut self) -> Result<Self> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidArgument("API key must be provided".to_string()));
        }

        let url = Url::parse(&self.base_path).map_err(|e| {
            Error::InvalidArgument(format!("invalid base path '{}': {}", self.base_path, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidArgument(format!(
                "base path must use http or https, got '{}'",
                url.scheme()
            )));
        }

        let trimmed = self.base_path.trim_end_matches('/').len();
        self.base_path.truncate(trimmed);
        Ok(self)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_path", &self.base_path)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Timeouts are written as a number of seconds in configuration files.
mod timeout_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("mailerlite-rs/"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("super-secret-token");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_validate_strips_trailing_slash() {
        let config = Config::new("key")
            .with_base_path("http://localhost:9090//")
            .validate()
            .unwrap();
        assert_eq!(config.base_path, "http://localhost:9090");
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let err = Config::new("   ").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_validate_rejects_relative_base_path() {
        let err = Config::new("key")
            .with_base_path("connect.mailerlite.com")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let err = Config::new("key")
            .with_base_path("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_deserialize_timeout_seconds() {
        let config: Config =
            serde_json::from_str(r#"{"api_key": "k", "base_path": "http://x", "timeout": 2.5}"#)
                .unwrap();
        assert_eq!(config.base_path, "http://x");
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
    }
}
