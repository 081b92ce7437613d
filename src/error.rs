//
//  mailerlite-rs
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the MailerLite SDK.
//!
//! HTTP-level failures (4xx/5xx) are **not** errors in this crate: they are
//! returned as [`ApiResponse::Failure`](crate::api::ApiResponse::Failure) so
//! callers branch on them as data. The variants below cover everything that
//! prevents a normalized response from being produced at all.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `InvalidArgument` | A required identifier or credential is missing or malformed |
//! | `Network` | The HTTP exchange could not happen (DNS, connect, timeout) |
//! | `Serialization` | A body or parameter value could not be turned into JSON |
//! | `Decode` | A 2xx body does not match the expected payload type |
//! | `RequestFailed` | An explicit unwrap helper met a non-2xx response |
//! | `StatsUnavailable` | A statistics field is missing from a successful payload |

use thiserror::Error;

/// Unified error type for all SDK operations.
///
/// # Example
///
/// ```rust
/// use mailerlite::{Error, MailerLite};
///
/// match MailerLite::new("") {
///     Err(Error::InvalidArgument(reason)) => println!("bad input: {}", reason),
///     Err(e) => println!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A precondition on the call was violated before any network activity.
    ///
    /// Raised for empty identifiers, identifiers that would alter the URL
    /// path, an empty API key, or an unparseable base path.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange itself failed.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and
    /// failures while reading the response body. Never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body or query parameter value could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A successful response carried a body that does not match the
    /// expected payload type.
    #[error("Failed to decode response with status {status}: {source}")]
    Decode {
        /// HTTP status of the response whose body failed to decode.
        status: u16,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx response was unwrapped explicitly.
    ///
    /// Only produced by helpers that opt into exception-style flow, such as
    /// [`RawResponse::unwrap_if_ok`](crate::api::RawResponse::unwrap_if_ok)
    /// and [`ApiResponse::into_result`](crate::api::ApiResponse::into_result).
    #[error("Request failed with status {status}: {status_text}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status, possibly empty.
        status_text: String,
    },

    /// Statistics could not be extracted from an otherwise valid payload.
    #[error("{0}")]
    StatsUnavailable(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = Error::RequestFailed {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 404: Not Found");
    }

    #[test]
    fn test_stats_unavailable_message_is_verbatim() {
        let err = Error::StatsUnavailable("No stats available.".to_string());
        assert_eq!(err.to_string(), "No stats available.");
    }

    #[test]
    fn test_serialization_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = source.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
