//
//  mailerlite-rs
//  api/resources/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Groups API.
//!
//! Groups are named, manually managed subscriber lists. Membership is edited
//! through the subscriber path (`/api/subscribers/{s}/groups/{g}`), which is
//! why [`Groups::assign_subscriber`] and [`Groups::unassign_subscriber`] take
//! both identifiers.
//!
//! # Example
//!
//! ```rust,no_run
//! use mailerlite::api::resources::groups::CreateUpdateGroupParams;
//! use mailerlite::{ApiResponse, MailerLite};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("api-key")?;
//!
//! let created = client
//!     .groups
//!     .create(&CreateUpdateGroupParams { name: "VIP".to_string() })
//!     .await?;
//!
//! if let ApiResponse::Success { data } = created {
//!     client.groups.assign_subscriber("31897397363737859", &data.data.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::subscribers::SubscriberFilter;
use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent, Rate, SubscriberObject};
use crate::error::Result;

/// Sort key for group listings. `*Desc` variants sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupSort {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "-name")]
    NameDesc,
    #[serde(rename = "total")]
    Total,
    #[serde(rename = "-total")]
    TotalDesc,
    #[serde(rename = "open_rate")]
    OpenRate,
    #[serde(rename = "-open_rate")]
    OpenRateDesc,
    #[serde(rename = "click_rate")]
    ClickRate,
    #[serde(rename = "-click_rate")]
    ClickRateDesc,
    #[serde(rename = "created_at")]
    CreatedAt,
    #[serde(rename = "-created_at")]
    CreatedAtDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query parameters for listing groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetGroupsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<GroupFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<GroupSort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUpdateGroupParams {
    pub name: String,
}

/// Query parameters for listing the members of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupSubscribersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SubscriberFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Deprecated; prefer `cursor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// A group as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupObject {
    pub id: String,
    pub name: String,
    pub active_count: u64,
    pub sent_count: u64,
    pub opens_count: u64,
    pub open_rate: Rate,
    pub clicks_count: u64,
    pub click_rate: Rate,
    pub unsubscribed_count: u64,
    pub unconfirmed_count: u64,
    pub bounced_count: u64,
    pub junk_count: u64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGroupsResponse {
    pub data: Vec<GroupObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleGroupResponse {
    pub data: GroupObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGroupSubscribersResponse {
    pub data: Vec<SubscriberObject>,
    pub links: Links,
    pub meta: Meta,
}

/// Groups façade.
#[derive(Debug, Clone)]
pub struct Groups {
    client: ApiClient,
}

resource!(Groups);

impl Groups {
    pub async fn get(&self, params: &GetGroupsParams) -> Result<ApiResponse<ListGroupsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/groups", options).await
    }

    pub async fn create(
        &self,
        params: &CreateUpdateGroupParams,
    ) -> Result<ApiResponse<SingleGroupResponse>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/groups", options).await
    }

    pub async fn update(
        &self,
        group_id: &str,
        params: &CreateUpdateGroupParams,
    ) -> Result<ApiResponse<SingleGroupResponse>> {
        validate_id(group_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/groups/{}", group_id), options)
            .await
    }

    /// Deletes a group. Its members stay on the account.
    pub async fn delete(&self, group_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(group_id)?;

        self.client
            .discriminated_request(
                &format!("/api/groups/{}", group_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }

    /// Lists the subscribers in a group.
    pub async fn get_subscribers(
        &self,
        group_id: &str,
        params: &GroupSubscribersParams,
    ) -> Result<ApiResponse<ListGroupSubscribersResponse>> {
        validate_id(group_id)?;

        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/groups/{}/subscribers", group_id), options)
            .await
    }

    /// Adds a subscriber to a group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// either identifier is empty or malformed.
    pub async fn assign_subscriber(
        &self,
        subscriber_id: &str,
        group_id: &str,
    ) -> Result<ApiResponse<SingleGroupResponse>> {
        validate_id(subscriber_id)?;
        validate_id(group_id)?;

        self.client
            .discriminated_request(
                &format!("/api/subscribers/{}/groups/{}", subscriber_id, group_id),
                RequestOptions::new(Method::POST),
            )
            .await
    }

    /// Removes a subscriber from a group.
    pub async fn unassign_subscriber(
        &self,
        subscriber_id: &str,
        group_id: &str,
    ) -> Result<ApiResponse<NoContent>> {
        validate_id(subscriber_id)?;
        validate_id(group_id)?;

        self.client
            .discriminated_request(
                &format!("/api/subscribers/{}/groups/{}", subscriber_id, group_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }
}
