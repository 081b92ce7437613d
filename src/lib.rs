//
//  mailerlite-rs
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # MailerLite SDK
//!
//! A typed async client for the MailerLite email-marketing REST API.
//!
//! ## Overview
//!
//! [`MailerLite`] is the entry point. It is built once from an API key and
//! exposes one façade per API resource as a public field. Every façade
//! method returns an [`ApiResponse`]: HTTP failures are values to match on,
//! not errors.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport core, response types and resource façades
//! - [`config`]: Client configuration
//! - [`error`]: Error type
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mailerlite::api::subscribers::GetSubscribersParams;
//! use mailerlite::{ApiResponse, MailerLite};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("your-api-key")?;
//!
//! let params = GetSubscribersParams { limit: Some(10), ..Default::default() };
//! match client.subscribers.get(&params).await? {
//!     ApiResponse::Success { data } => {
//!         for subscriber in data.data {
//!             println!("{}", subscriber.email);
//!         }
//!     }
//!     ApiResponse::Failure { response } => {
//!         eprintln!("request failed with status {}", response.status);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Result Semantics
//!
//! | Outcome | Returned as |
//! |---------|-------------|
//! | 2xx | `Ok(ApiResponse::Success { data })` |
//! | 4xx / 5xx | `Ok(ApiResponse::Failure { response })` |
//! | Empty or malformed ID | `Err(Error::InvalidArgument)` |
//! | Connection failure or timeout | `Err(Error::Network)` |
//!
//! ## Logging
//!
//! Requests are logged with [`tracing`] at `debug` level (method, URL and
//! status; never the API key). The library does not install a subscriber.

/// API transport, response types and resource façades.
pub mod api;

/// Client configuration.
pub mod config;

/// Error type and result alias.
pub mod error;

use api::client::ApiClient;
use api::resources::{
    Automations, Batches, Campaigns, Fields, Forms, Groups, Languages, Resource, Segments,
    Statistics, Subscribers, Timezones, Webhooks,
};

pub use api::{ApiResponse, NoContent, RawResponse};
pub use config::Config;
pub use error::{Error, Result};

/// Library version constant.
///
/// Derived from Cargo.toml at compile time and used in the default
/// `User-Agent` header.
///
/// # Example
///
/// ```rust
/// use mailerlite::VERSION;
///
/// println!("mailerlite-rs {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The MailerLite client.
///
/// Holds one façade per API resource. All façades share a single
/// configuration and HTTP connection pool; the client is cheap to clone and
/// safe to use from many tasks at once. Two clients built with different
/// keys never share state.
///
/// # Example
///
/// ```rust,no_run
/// use mailerlite::MailerLite;
///
/// # async fn example() -> mailerlite::Result<()> {
/// let client = MailerLite::with_base_path("api-key", "http://localhost:9090")?;
/// let count = client.subscribers.get_count().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MailerLite {
    pub subscribers: Subscribers,
    pub campaigns: Campaigns,
    pub forms: Forms,
    pub groups: Groups,
    pub segments: Segments,
    pub fields: Fields,
    pub automations: Automations,
    pub timezones: Timezones,
    pub languages: Languages,
    pub batches: Batches,
    pub webhooks: Webhooks,
    pub stats: Statistics,
}

impl MailerLite {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `api_key` is empty
    /// - [`Error::Network`] if the HTTP client cannot be built
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(Config::new(api_key))
    }

    /// Creates a client for a different base path, such as a proxy or a
    /// local mock server.
    ///
    /// # Errors
    ///
    /// As [`MailerLite::new`], plus [`Error::InvalidArgument`] when
    /// `base_path` is not an absolute `http`/`https` URL.
    pub fn with_base_path(api_key: impl Into<String>, base_path: impl Into<String>) -> Result<Self> {
        Self::from_config(Config::new(api_key).with_base_path(base_path))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use mailerlite::{Config, MailerLite};
    ///
    /// let config = Config::new("api-key").with_timeout(Duration::from_secs(15));
    /// let client = MailerLite::from_config(config)?;
    /// # Ok::<(), mailerlite::Error>(())
    /// ```
    pub fn from_config(config: Config) -> Result<Self> {
        let client = ApiClient::new(config)?;
        tracing::debug!("MailerLite client targeting {}", client.config().base_path);

        Ok(Self {
            subscribers: Subscribers::new(client.clone()),
            campaigns: Campaigns::new(client.clone()),
            forms: Forms::new(client.clone()),
            groups: Groups::new(client.clone()),
            segments: Segments::new(client.clone()),
            fields: Fields::new(client.clone()),
            automations: Automations::new(client.clone()),
            timezones: Timezones::new(client.clone()),
            languages: Languages::new(client.clone()),
            batches: Batches::new(client.clone()),
            webhooks: Webhooks::new(client.clone()),
            stats: Statistics::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn test_client_is_send_sync_clone() {
        assert_send_sync::<MailerLite>();
        assert_send_sync::<ApiClient>();
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(MailerLite::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_bad_base_path_is_rejected() {
        assert!(matches!(
            MailerLite::with_base_path("key", "not a url"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_construction_succeeds() {
        assert!(MailerLite::new("key").is_ok());
        assert!(MailerLite::with_base_path("key", "http://127.0.0.1:1234").is_ok());
    }
}
