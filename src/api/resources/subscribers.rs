//
//  mailerlite-rs
//  api/resources/subscribers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Subscribers API.
//!
//! Subscribers are the people on the mailing list. They are keyed by email
//! on creation: posting an existing email updates that subscriber instead of
//! failing.
//!
//! # Operations
//!
//! | Method | HTTP |
//! |--------|------|
//! | [`Subscribers::get`] | `GET /api/subscribers` |
//! | [`Subscribers::create_or_update`] | `POST /api/subscribers` |
//! | [`Subscribers::update`] | `PUT /api/subscribers/{id}` |
//! | [`Subscribers::find`] | `GET /api/subscribers/{id}` |
//! | [`Subscribers::get_count`] | `GET /api/subscribers?limit=0` |
//! | [`Subscribers::delete`] | `DELETE /api/subscribers/{id}` |
//! | [`Subscribers::forget`] | `POST /api/subscribers/{id}/forget` |
//!
//! # Example
//!
//! ```rust,no_run
//! use mailerlite::api::resources::subscribers::{GetSubscribersParams, SubscriberFilter};
//! use mailerlite::api::common::SubscriberStatus;
//! use mailerlite::{ApiResponse, MailerLite};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("api-key")?;
//!
//! let params = GetSubscribersParams {
//!     filter: Some(SubscriberFilter { status: SubscriberStatus::Active }),
//!     limit: Some(5),
//!     ..Default::default()
//! };
//!
//! if let ApiResponse::Success { data } = client.subscribers.get(&params).await? {
//!     for subscriber in data.data {
//!         println!("{} ({})", subscriber.email, subscriber.status);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{
    validate_id, ApiResponse, Links, Meta, NoContent, SubscriberObject, SubscriberStatus,
};
use crate::error::Result;

/// Query parameters for listing subscribers.
///
/// # Fields
///
/// * `filter` - Restrict the list to one status (`filter[status]=...`)
/// * `limit` - Page size, 25 by default on the server
/// * `page` - Deprecated page number; prefer `cursor`
/// * `cursor` - Cursor returned in `meta.next_cursor` of a previous page
/// * `include` - Embed related records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetSubscribersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SubscriberFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<SubscriberInclude>,
}

/// Status filter shared by every subscriber listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubscriberFilter {
    pub status: SubscriberStatus,
}

/// Related records that can be embedded in a subscriber listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberInclude {
    Groups,
}

/// Mutable subscriber attributes.
///
/// `fields` maps custom field keys (see the fields resource) to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSubscriberParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,
    /// Group IDs the subscriber should belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opted_in_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optin_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribed_at: Option<String>,
}

/// Body of a create-or-update call: an email plus any update attributes.
///
/// # Example
///
/// ```rust
/// use mailerlite::api::resources::subscribers::{
///     CreateOrUpdateSubscriberParams, UpdateSubscriberParams,
/// };
///
/// let params = CreateOrUpdateSubscriberParams {
///     email: "jane@example.com".to_string(),
///     attributes: UpdateSubscriberParams {
///         groups: Some(vec!["4243829086895191".to_string()]),
///         ..Default::default()
///     },
/// };
///
/// let body = serde_json::to_value(&params).unwrap();
/// assert_eq!(body["email"], "jane@example.com");
/// assert_eq!(body["groups"][0], "4243829086895191");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateOrUpdateSubscriberParams {
    pub email: String,
    #[serde(flatten)]
    pub attributes: UpdateSubscriberParams,
}

/// Cursor-paginated subscriber list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListSubscribersResponse {
    pub data: Vec<SubscriberObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SingleSubscriberResponse {
    pub data: SubscriberObject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CountSubscribersResponse {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForgetSubscriberResponse {
    pub message: String,
    pub data: SubscriberObject,
}

/// Subscribers façade.
#[derive(Debug, Clone)]
pub struct Subscribers {
    client: ApiClient,
}

resource!(Subscribers);

impl Subscribers {
    /// Lists subscribers.
    pub async fn get(
        &self,
        params: &GetSubscribersParams,
    ) -> Result<ApiResponse<ListSubscribersResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request("/api/subscribers", options)
            .await
    }

    /// Creates a subscriber, or updates the one with the same email.
    ///
    /// The server answers `201` for a new subscriber and `200` for an
    /// update; both are `Success`.
    pub async fn create_or_update(
        &self,
        params: &CreateOrUpdateSubscriberParams,
    ) -> Result<ApiResponse<SingleSubscriberResponse>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request("/api/subscribers", options)
            .await
    }

    /// Updates an existing subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for
    /// an empty or malformed `subscriber_id`.
    pub async fn update(
        &self,
        subscriber_id: &str,
        params: &UpdateSubscriberParams,
    ) -> Result<ApiResponse<SingleSubscriberResponse>> {
        validate_id(subscriber_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/subscribers/{}", subscriber_id), options)
            .await
    }

    /// Fetches one subscriber by ID.
    ///
    /// The API also accepts the subscriber's email in place of the ID.
    pub async fn find(&self, subscriber_id: &str) -> Result<ApiResponse<SingleSubscriberResponse>> {
        validate_id(subscriber_id)?;

        self.client
            .discriminated_request(
                &format!("/api/subscribers/{}", subscriber_id),
                RequestOptions::new(Method::GET),
            )
            .await
    }

    /// Returns the total number of subscribers on the account.
    pub async fn get_count(&self) -> Result<ApiResponse<CountSubscribersResponse>> {
        let options = RequestOptions::new(Method::GET).params(json!({"limit": 0}));
        self.client
            .discriminated_request("/api/subscribers", options)
            .await
    }

    /// Deletes a subscriber. They can sign up again later.
    pub async fn delete(&self, subscriber_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(subscriber_id)?;

        self.client
            .discriminated_request(
                &format!("/api/subscribers/{}", subscriber_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }

    /// Forgets a subscriber (GDPR erasure).
    ///
    /// The subscriber is removed from every list and their data is purged
    /// after 30 days.
    pub async fn forget(&self, subscriber_id: &str) -> Result<ApiResponse<ForgetSubscriberResponse>> {
        validate_id(subscriber_id)?;

        self.client
            .discriminated_request(
                &format!("/api/subscribers/{}/forget", subscriber_id),
                RequestOptions::new(Method::POST),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::serialize_query;
    use crate::api::resources::test_support::offline_client;
    use crate::api::resources::Resource;
    use crate::error::Error;

    #[test]
    fn test_list_params_serialize_to_bracket_query() {
        let params = GetSubscribersParams {
            filter: Some(SubscriberFilter {
                status: SubscriberStatus::Active,
            }),
            limit: Some(5),
            include: Some(SubscriberInclude::Groups),
            ..Default::default()
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            serialize_query(&value, None),
            "filter[status]=active&include=groups&limit=5"
        );
    }

    #[test]
    fn test_default_params_send_nothing() {
        let value = serde_json::to_value(GetSubscribersParams::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_create_body_flattens_attributes() {
        let params = CreateOrUpdateSubscriberParams {
            email: "a@example.com".to_string(),
            attributes: UpdateSubscriberParams {
                status: Some(SubscriberStatus::Unconfirmed),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"email": "a@example.com", "status": "unconfirmed"})
        );
    }

    #[test]
    fn test_count_response() {
        let count: CountSubscribersResponse =
            serde_json::from_value(json!({"total": 1234, "data": []})).unwrap();
        assert_eq!(count.total, 1234);
    }

    #[tokio::test]
    async fn test_empty_id_fails_before_network() {
        let subscribers = Subscribers::new(offline_client());

        assert!(matches!(
            subscribers.find("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            subscribers.delete("  ").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            subscribers.forget("").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            subscribers
                .update("", &UpdateSubscriberParams::default())
                .await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
