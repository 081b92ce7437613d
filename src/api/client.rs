//
//  mailerlite-rs
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the MailerLite API
//!
//! This module provides the transport core shared by every resource façade.
//! It turns an endpoint path plus [`RequestOptions`] into one HTTP exchange
//! and normalizes whatever comes back into a [`RawResponse`].
//!
//! ## Features
//!
//! - Bearer token authentication on every request
//! - Bracket-notation query strings for nested filters
//! - JSON request bodies
//! - Tolerant body parsing (empty or non-JSON bodies become `None`)
//! - Per-call timeouts overriding the configured default
//!
//! ## Request Flow
//!
//! ```text
//! façade method ──► ApiClient::discriminated_request
//!                        │
//!                        ├─► build_url (base_path + endpoint + ?query)
//!                        ├─► send with auth + JSON headers
//!                        ├─► RawResponse { data, status, status_text, ok }
//!                        └─► to_discriminated ──► ApiResponse<T>
//! ```
//!
//! HTTP status failures come back as data; only network failures are `Err`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::common::{serialize_query, to_discriminated, ApiResponse, RawResponse};
use crate::config::Config;
use crate::error::{Error, Result};

/// Per-call request descriptor.
///
/// # Fields
///
/// * `method` - HTTP method, `GET` by default
/// * `body` - Optional JSON body; no body is sent when `None`
/// * `params` - Optional query parameters, flattened with [`serialize_query`]
/// * `headers` - Extra headers; the authentication and content headers always win
/// * `timeout` - Overrides [`Config::timeout`] for this call only
///
/// # Example
///
/// ```rust
/// use mailerlite::api::RequestOptions;
/// use reqwest::Method;
/// use serde_json::json;
///
/// let options = RequestOptions::new(Method::GET)
///     .params(json!({"filter": {"status": "active"}, "limit": 5}))
///     .header("X-Trace-Id", "abc");
///
/// assert_eq!(options.method, Method::GET);
/// assert!(options.body.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub params: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates options for the given method with nothing else set.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Sets the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the query parameters.
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds an extra header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a timeout for this call only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The transport core.
///
/// Holds the shared configuration behind an `Arc` and one `reqwest::Client`
/// (itself reference-counted), so cloning is cheap and every façade keeps its
/// own handle. There is no mutable state: concurrent calls need no
/// coordination.
///
/// # Example
///
/// ```rust,no_run
/// use mailerlite::api::{ApiClient, RequestOptions};
/// use mailerlite::Config;
/// use reqwest::Method;
///
/// # async fn example() -> mailerlite::Result<()> {
/// let client = ApiClient::new(Config::new("api-key"))?;
/// let raw = client
///     .request("/api/timezones", RequestOptions::new(Method::GET))
///     .await?;
/// println!("status {}", raw.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying HTTP client
    http: Client,
    /// Validated, read-only configuration
    config: Arc<Config>,
}

impl ApiClient {
    /// Creates a transport from a configuration.
    ///
    /// The configuration is validated first (see [`Config::validate`]).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty API key or bad base path
    /// - [`Error::Network`] if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self> {
        let config = config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Composes the full request URL.
    ///
    /// The endpoint is appended to the base path verbatim. A `?` and query
    /// string are added only when the parameters flatten to something.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailerlite::api::ApiClient;
    /// use mailerlite::Config;
    /// use serde_json::json;
    ///
    /// let client = ApiClient::new(Config::new("key"))?;
    ///
    /// assert_eq!(
    ///     client.build_url("/api/subscribers", Some(&json!({"limit": 0}))),
    ///     "https://connect.mailerlite.com/api/subscribers?limit=0"
    /// );
    /// assert_eq!(
    ///     client.build_url("/api/subscribers", Some(&json!({}))),
    ///     "https://connect.mailerlite.com/api/subscribers"
    /// );
    /// # Ok::<(), mailerlite::Error>(())
    /// ```
    pub fn build_url(&self, endpoint: &str, params: Option<&Value>) -> String {
        let query = params
            .map(|p| serialize_query(p, None))
            .unwrap_or_default();

        if query.is_empty() {
            format!("{}{}", self.config.base_path, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_path, endpoint, query)
        }
    }

    /// Performs one HTTP exchange and normalizes the outcome.
    ///
    /// Resolves for every response the server sends, whatever its status.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] when the server cannot be reached, the call times
    ///   out, or the body cannot be read
    /// - [`Error::InvalidArgument`] when an extra header is not a valid header
    /// - [`Error::Serialization`] when the body cannot be encoded
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<RawResponse> {
        let url = self.build_url(endpoint, options.params.as_ref());
        let headers = self.headers(&options.headers)?;

        tracing::debug!("{} {}", options.method, url);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} responded with {}", url, status);

        let bytes = response.bytes().await?;

        Ok(RawResponse::from_parts(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &bytes,
        ))
    }

    /// Performs one HTTP exchange and returns the discriminated result.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The payload type a 2xx body is decoded into
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::request`] can return, plus [`Error::Decode`]
    /// when a 2xx body does not match `T`.
    pub async fn discriminated_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse<T>> {
        let raw = self.request(endpoint, options).await?;
        to_discriminated(raw)
    }

    /// Builds the header map: caller extras first, fixed headers on top.
    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidArgument(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                Error::InvalidArgument(format!("invalid value for header '{}': {}", name, e))
            })?;
            headers.append(name, value);
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key))
            .map_err(|_| Error::InvalidArgument("API key contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(Config::new("test-key").with_base_path("http://localhost:9090/")).unwrap()
    }

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            client().build_url("/api/timezones", None),
            "http://localhost:9090/api/timezones"
        );
    }

    #[test]
    fn test_build_url_with_nested_params() {
        let url = client().build_url(
            "/api/subscribers",
            Some(&json!({"filter": {"status": "active"}, "limit": 5})),
        );
        assert_eq!(
            url,
            "http://localhost:9090/api/subscribers?filter[status]=active&limit=5"
        );
    }

    #[test]
    fn test_build_url_with_empty_params_has_no_question_mark() {
        let url = client().build_url("/api/groups", Some(&json!({"filter": {}})));
        assert_eq!(url, "http://localhost:9090/api/groups");
    }

    #[test]
    fn test_fixed_headers_override_extras() {
        let headers = client()
            .headers(&[
                ("Authorization".to_string(), "Bearer other".to_string()),
                ("X-Custom".to_string(), "1".to_string()),
            ])
            .unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer test-key");
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers["x-custom"], "1");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers["x-requested-with"], "XMLHttpRequest");
    }

    #[test]
    fn test_invalid_extra_header_is_rejected() {
        let err = client()
            .headers(&[("bad header".to_string(), "x".to_string())])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_new_rejects_empty_api_key() {
        assert!(matches!(
            ApiClient::new(Config::new("")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new(Method::POST)
            .body(json!({"email": "a@example.com"}))
            .timeout(Duration::from_secs(3));
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body, Some(json!({"email": "a@example.com"})));
        assert_eq!(options.timeout, Some(Duration::from_secs(3)));
        assert!(options.params.is_none());
    }

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(RequestOptions::default().method, Method::GET);
    }
}
