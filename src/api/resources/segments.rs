//
//  mailerlite-rs
//  api/resources/segments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Segments API.
//!
//! Segments are rule-based subscriber lists maintained by MailerLite. They
//! are created in the dashboard; the API can list, rename and delete them
//! and read their members.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::subscribers::SubscriberFilter;
use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent, Rate, SubscriberObject};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetSegmentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Query parameters for listing the members of a segment.
///
/// # Fields
///
/// * `filter` - Restrict to one subscriber status
/// * `limit` - Page size
/// * `after` - Return subscribers after this subscriber ID
/// * `cursor` - Cursor from a previous page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetSegmentSubscribersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SubscriberFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateSegmentParams {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentObject {
    pub id: String,
    pub name: String,
    pub total: u64,
    pub open_rate: Rate,
    pub click_rate: Rate,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSegmentsResponse {
    pub data: Vec<SegmentObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleSegmentResponse {
    pub data: SegmentObject,
}

/// Counters returned with a segment's member list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSubscribersMeta {
    pub total: u64,
    pub count: u64,
    pub last: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSegmentSubscribersResponse {
    pub data: Vec<SubscriberObject>,
    pub meta: SegmentSubscribersMeta,
}

/// Segments façade.
#[derive(Debug, Clone)]
pub struct Segments {
    client: ApiClient,
}

resource!(Segments);

impl Segments {
    pub async fn get(&self, params: &GetSegmentsParams) -> Result<ApiResponse<ListSegmentsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/segments", options).await
    }

    pub async fn get_subscribers(
        &self,
        segment_id: &str,
        params: &GetSegmentSubscribersParams,
    ) -> Result<ApiResponse<ListSegmentSubscribersResponse>> {
        validate_id(segment_id)?;

        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/segments/{}/subscribers", segment_id), options)
            .await
    }

    /// Renames a segment.
    pub async fn update(
        &self,
        segment_id: &str,
        params: &UpdateSegmentParams,
    ) -> Result<ApiResponse<SingleSegmentResponse>> {
        validate_id(segment_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/segments/{}", segment_id), options)
            .await
    }

    pub async fn delete(&self, segment_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(segment_id)?;

        self.client
            .discriminated_request(
                &format!("/api/segments/{}", segment_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{serialize_query, SubscriberStatus};
    use crate::api::resources::test_support::offline_client;
    use crate::api::resources::Resource;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_member_params_query() {
        let params = GetSegmentSubscribersParams {
            filter: Some(SubscriberFilter {
                status: SubscriberStatus::Active,
            }),
            after: Some(1200),
            ..Default::default()
        };

        let query = serialize_query(&serde_json::to_value(&params).unwrap(), None);
        assert_eq!(query, "after=1200&filter[status]=active");
    }

    #[test]
    fn test_member_list_meta() {
        let response: ListSegmentSubscribersResponse = serde_json::from_value(json!({
            "data": [{"id": "1", "email": "a@example.com"}],
            "meta": {"total": 10, "count": 1, "last": 1}
        }))
        .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.meta.total, 10);
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_before_network() {
        let segments = Segments::new(offline_client());

        assert!(matches!(segments.delete("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            segments
                .get_subscribers("#1", &GetSegmentSubscribersParams::default())
                .await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
