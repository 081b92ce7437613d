//
//  mailerlite-rs
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common Response Types and Helpers
//!
//! This module holds the pieces every resource façade funnels through:
//!
//! - [`RawResponse`] - What the transport core observed: parsed body, status, `ok`
//! - [`ApiResponse`] - The discriminated result returned by every façade method
//! - [`to_discriminated`] - The pure adapter from the former to the latter
//! - [`validate_id`] - Fail-fast check for identifiers interpolated into paths
//! - [`serialize_query`] - Bracket-notation query string builder
//! - Shared wire types ([`Links`], [`Meta`], [`Stats`], [`SubscriberObject`], ...)
//!
//! # Example
//!
//! ```rust
//! use mailerlite::api::common::{to_discriminated, ApiResponse, RawResponse};
//! use serde_json::json;
//!
//! let raw = RawResponse {
//!     data: Some(json!({"total": 3})),
//!     status: 200,
//!     status_text: "OK".to_string(),
//!     ok: true,
//! };
//!
//! match to_discriminated::<serde_json::Value>(raw)? {
//!     ApiResponse::Success { data } => assert_eq!(data["total"], 3),
//!     ApiResponse::Failure { response } => panic!("unexpected status {}", response.status),
//! }
//! # Ok::<(), mailerlite::Error>(())
//! ```

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

mod query;
mod types;

pub use query::serialize_query;
pub use types::*;

/// The transport core's view of one HTTP exchange.
///
/// Produced for every well-formed HTTP exchange regardless of status code.
/// A 404 or 500 is a normal `RawResponse` with `ok == false`.
///
/// # Type Parameters
///
/// - `T` - Type of the parsed body. The transport core always produces
///   `RawResponse<serde_json::Value>`; typed variants come from
///   [`RawResponse::map`].
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `data` | Parsed JSON body, `None` when the body was empty or not JSON |
/// | `status` | HTTP status code |
/// | `status_text` | Reason phrase for the status, possibly empty |
/// | `ok` | `true` iff `status` is in `200..=299` |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawResponse<T = Value> {
    /// Parsed response body, or `None` when absent or unparseable.
    pub data: Option<T>,

    /// HTTP status code.
    pub status: u16,

    /// Reason phrase for the status code.
    pub status_text: String,

    /// Whether the status is in the 2xx range.
    pub ok: bool,
}

impl RawResponse<Value> {
    /// Builds a raw response from a status line and the undecoded body bytes.
    ///
    /// An empty body, or one that is not valid JSON, yields `data == None`
    /// instead of an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailerlite::api::common::RawResponse;
    ///
    /// let raw = RawResponse::from_parts(404, "Not Found", b"");
    /// assert!(!raw.ok);
    /// assert!(raw.data.is_none());
    ///
    /// let raw = RawResponse::from_parts(502, "Bad Gateway", b"<html>oops</html>");
    /// assert!(raw.data.is_none());
    /// ```
    pub fn from_parts(status: u16, status_text: impl Into<String>, body: &[u8]) -> Self {
        Self {
            data: parse_body(body),
            status,
            status_text: status_text.into(),
            ok: (200..=299).contains(&status),
        }
    }

    /// Returns the body decoded as `T` when the response is `ok`.
    ///
    /// This is the exception-style counterpart of [`to_discriminated`].
    ///
    /// # Errors
    ///
    /// - [`Error::RequestFailed`] when the status is outside the 2xx range
    /// - [`Error::Decode`] when the body does not match `T`
    pub fn unwrap_if_ok<T: DeserializeOwned>(self) -> Result<T> {
        if !self.ok {
            return Err(Error::RequestFailed {
                status: self.status,
                status_text: self.status_text,
            });
        }
        decode(self.status, self.data)
    }
}

impl<T> RawResponse<T> {
    /// Transforms the parsed body while keeping the status fields.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RawResponse<U> {
        RawResponse {
            data: self.data.map(f),
            status: self.status,
            status_text: self.status_text,
            ok: self.ok,
        }
    }
}

/// The result of every façade operation.
///
/// Exactly one of two shapes:
///
/// - `Success { data }` - the server answered with a 2xx status
/// - `Failure { response }` - any other status; the complete [`RawResponse`]
///   is preserved so callers can inspect status, reason and body
///
/// HTTP failures are never returned as `Err`; network failures are.
///
/// # Example
///
/// ```rust,no_run
/// use mailerlite::{ApiResponse, MailerLite};
///
/// # async fn example() -> mailerlite::Result<()> {
/// let client = MailerLite::new("api-key")?;
///
/// match client.subscribers.find("31897397363737859").await? {
///     ApiResponse::Success { data } => println!("found {}", data.data.email),
///     ApiResponse::Failure { response } if response.status == 404 => println!("no such subscriber"),
///     ApiResponse::Failure { response } => println!("API said {}: {:?}", response.status, response.data),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// The request succeeded with a 2xx status.
    Success {
        /// The decoded response body.
        data: T,
    },

    /// The server answered with a non-2xx status.
    Failure {
        /// Everything the transport observed about the response.
        response: RawResponse,
    },
}

impl<T> ApiResponse<T> {
    /// Returns `true` for the `Success` variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Borrows the payload of a successful response.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Borrows the raw response of a failed request.
    pub fn failure(&self) -> Option<&RawResponse> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { response } => Some(response),
        }
    }

    /// Converts into a `Result`, turning `Failure` into [`Error::RequestFailed`].
    ///
    /// Use this when exception-style flow with `?` is preferred over
    /// branching on the variants.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { response } => Err(Error::RequestFailed {
                status: response.status,
                status_text: response.status_text,
            }),
        }
    }
}

/// Converts a raw response into the discriminated result.
///
/// Pure function of its input. When the response is `ok` the body is decoded
/// into `T`; otherwise the raw response is returned untouched inside
/// `Failure`. A 2xx without a body decodes from `null`, or from `{}` for
/// struct payloads, so it is still a `Success`.
///
/// # Errors
///
/// Returns [`Error::Decode`] when a 2xx body does not match `T`.
pub fn to_discriminated<T: DeserializeOwned>(raw: RawResponse) -> Result<ApiResponse<T>> {
    if raw.ok {
        let data = decode(raw.status, raw.data)?;
        return Ok(ApiResponse::Success { data });
    }
    Ok(ApiResponse::Failure { response: raw })
}

fn decode<T: DeserializeOwned>(status: u16, data: Option<Value>) -> Result<T> {
    let decoded = match data {
        Some(value) => serde_json::from_value(value),
        // No body: `null` first, then `{}` so defaulted structs still decode.
        None => serde_json::from_value(Value::Null)
            .or_else(|_| serde_json::from_value(Value::Object(Map::new()))),
    };
    decoded.map_err(|source| Error::Decode { status, source })
}

/// Parses a response body, mapping empty or non-JSON payloads to `None`.
pub(crate) fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::trace!("Response body is not JSON: {}", e);
            None
        }
    }
}

/// Checks an identifier before it is interpolated into a URL path.
///
/// Identifiers are taken as strings only: MailerLite IDs can exceed the range
/// of an `f64`-safe integer, so numeric IDs are rejected at compile time
/// rather than converted.
///
/// ```compile_fail
/// mailerlite::api::common::validate_id(12345);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the identifier is empty or
/// contains `/`, `?` or `#`.
///
/// # Example
///
/// ```rust
/// use mailerlite::api::common::validate_id;
///
/// assert!(validate_id("abc123").is_ok());
/// assert!(validate_id("").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::InvalidArgument("ID must be provided".to_string()));
    }
    if id.contains(['/', '?', '#']) {
        return Err(Error::InvalidArgument(format!(
            "ID must be a single path segment, got '{}'",
            id
        )));
    }
    Ok(())
}

/// Success payload for operations whose body is empty or irrelevant.
///
/// Deletes answer `204 No Content`; `NoContent` accepts that as well as any
/// JSON body the server may choose to send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl<'de> Deserialize<'de> for NoContent {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NoContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: &[u8]) -> RawResponse {
        RawResponse::from_parts(status, "", body)
    }

    #[test]
    fn test_ok_tracks_2xx_range() {
        assert!(raw(200, b"").ok);
        assert!(raw(204, b"").ok);
        assert!(raw(299, b"").ok);
        assert!(!raw(199, b"").ok);
        assert!(!raw(300, b"").ok);
        assert!(!raw(404, b"").ok);
        assert!(!raw(500, b"").ok);
    }

    #[test]
    fn test_parse_body_handles_empty_and_garbage() {
        assert_eq!(parse_body(b""), None);
        assert_eq!(parse_body(b"  \n"), None);
        assert_eq!(parse_body(b"not json"), None);
        assert_eq!(parse_body(b"{\"a\":1}"), Some(json!({"a": 1})));
        assert_eq!(parse_body(b"null"), Some(Value::Null));
    }

    #[test]
    fn test_success_carries_parsed_body() {
        let response = raw(200, br#"{"data":[{"id":"1"}]}"#);
        let result = to_discriminated::<Value>(response).unwrap();
        assert_eq!(
            result,
            ApiResponse::Success {
                data: json!({"data": [{"id": "1"}]})
            }
        );
    }

    #[test]
    fn test_failure_preserves_status_and_body() {
        let body = br#"{"message":"The given data was invalid."}"#;
        let response = RawResponse::from_parts(422, "Unprocessable Entity", body);
        let result = to_discriminated::<Value>(response).unwrap();

        let failure = result.failure().unwrap();
        assert_eq!(failure.status, 422);
        assert_eq!(failure.status_text, "Unprocessable Entity");
        assert!(!failure.ok);
        assert_eq!(
            failure.data,
            Some(json!({"message": "The given data was invalid."}))
        );
    }

    #[test]
    fn test_failure_with_empty_body_has_no_data() {
        let result = to_discriminated::<NoContent>(raw(404, b"")).unwrap();
        match result {
            ApiResponse::Failure { response } => {
                assert_eq!(response.status, 404);
                assert!(response.data.is_none());
                assert!(!response.ok);
            }
            ApiResponse::Success { .. } => panic!("Expected Failure variant"),
        }
    }

    #[test]
    fn test_no_content_accepts_empty_and_json_bodies() {
        assert!(to_discriminated::<NoContent>(raw(204, b"")).unwrap().is_success());
        assert!(to_discriminated::<NoContent>(raw(200, br#"{"data":{}}"#))
            .unwrap()
            .is_success());
    }

    #[test]
    fn test_success_without_body_uses_struct_defaults() {
        #[derive(Debug, Default, PartialEq, Deserialize)]
        #[serde(default)]
        struct Single {
            id: String,
        }

        let result = to_discriminated::<Single>(raw(200, b"")).unwrap();
        assert_eq!(result, ApiResponse::Success { data: Single::default() });

        let value = to_discriminated::<Value>(raw(200, b"")).unwrap();
        assert_eq!(value, ApiResponse::Success { data: Value::Null });

        let total: Value = raw(200, b"").unwrap_if_ok().unwrap();
        assert_eq!(total, Value::Null);
    }

    #[test]
    fn test_success_with_mismatched_body_is_decode_error() {
        #[derive(Debug, Deserialize)]
        struct Count {
            #[allow(dead_code)]
            total: u64,
        }

        let err = to_discriminated::<Count>(raw(200, br#"{"total":"many"}"#)).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 200, .. }));
    }

    #[test]
    fn test_unwrap_if_ok() {
        let total: Value = raw(200, br#"{"total":5}"#).unwrap_if_ok().unwrap();
        assert_eq!(total["total"], 5);

        let err = RawResponse::from_parts(401, "Unauthorized", b"")
            .unwrap_if_ok::<Value>()
            .unwrap_err();
        assert!(matches!(err, Error::RequestFailed { status: 401, .. }));
    }

    #[test]
    fn test_into_result() {
        let ok: ApiResponse<u8> = ApiResponse::Success { data: 1 };
        assert_eq!(ok.into_result().unwrap(), 1);

        let failed: ApiResponse<u8> = ApiResponse::Failure {
            response: raw(500, b""),
        };
        assert!(matches!(
            failed.into_result(),
            Err(Error::RequestFailed { status: 500, .. })
        ));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("abc123").is_ok());
        assert!(validate_id("31897397363737859").is_ok());
        assert!(matches!(validate_id(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_id("   "), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_id("1/forget"), Err(Error::InvalidArgument(_))));
        assert!(matches!(validate_id("1?x=y"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_raw_response_map() {
        let mapped = raw(200, br#"{"total":5}"#).map(|v| v["total"].as_u64());
        assert_eq!(mapped.data, Some(Some(5)));
        assert_eq!(mapped.status, 200);
    }
}
