//
//  mailerlite-rs
//  api/resources/batches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Batch API.
//!
//! Up to 50 API calls can be bundled into one `POST /api/batch`. Each
//! descriptor names a method, a path (without the base path, e.g.
//! `api/subscribers`) and an optional body. The server runs them in order and
//! answers with one `{code, body}` entry per descriptor.
//!
//! The envelope is returned as the server sent it; individual bodies stay
//! raw JSON because each may belong to a different resource.
//!
//! # Example
//!
//! ```rust,no_run
//! use mailerlite::api::resources::batches::{BatchMethod, BatchParams, BatchRequest};
//! use mailerlite::{ApiResponse, MailerLite};
//! use serde_json::json;
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("api-key")?;
//!
//! let batch = BatchParams {
//!     requests: vec![
//!         BatchRequest::new(BatchMethod::Post, "api/subscribers")
//!             .with_body(json!({"email": "a@example.com"})),
//!         BatchRequest::new(BatchMethod::Get, "api/groups"),
//!     ],
//! };
//!
//! if let ApiResponse::Success { data } = client.batches.send(&batch).await? {
//!     println!("{}/{} succeeded", data.successful, data.total);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::ApiResponse;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// One call inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub method: BatchMethod,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl BatchRequest {
    pub fn new(method: BatchMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchParams {
    pub requests: Vec<BatchRequest>,
}

/// Outcome of one call inside a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResponseObject {
    /// HTTP status the call would have returned on its own.
    pub code: u16,
    pub body: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResponses {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub responses: Vec<BatchResponseObject>,
}

/// Batches façade.
#[derive(Debug, Clone)]
pub struct Batches {
    client: ApiClient,
}

resource!(Batches);

impl Batches {
    /// Sends all descriptors in a single request.
    pub async fn send(&self, params: &BatchParams) -> Result<ApiResponse<BatchResponses>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/batch", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptors_serialize_verbatim() {
        let params = BatchParams {
            requests: vec![
                BatchRequest::new(BatchMethod::Post, "api/subscribers")
                    .with_body(json!({"email": "a@example.com"})),
                BatchRequest::new(BatchMethod::Delete, "api/groups/1"),
            ],
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "requests": [
                    {"method": "POST", "path": "api/subscribers", "body": {"email": "a@example.com"}},
                    {"method": "DELETE", "path": "api/groups/1"}
                ]
            })
        );
    }

    #[test]
    fn test_response_bodies_stay_raw() {
        let response: BatchResponses = serde_json::from_value(json!({
            "total": 2,
            "successful": 1,
            "failed": 1,
            "responses": [
                {"code": 201, "body": {"data": {"id": "1"}}},
                {"code": 422, "body": {"message": "The email must be valid."}}
            ]
        }))
        .unwrap();

        assert_eq!(response.failed, 1);
        assert_eq!(response.responses[1].code, 422);
        assert_eq!(response.responses[0].body["data"]["id"], "1");
    }
}
