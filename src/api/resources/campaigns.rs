//
//  mailerlite-rs
//  api/resources/campaigns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Campaigns API types and façade.
//!
//! A campaign is one mailing: a set of emails, an audience (groups or
//! segments) and a delivery schedule. Campaigns move through three states:
//!
//! * `draft` - Being edited, can be updated freely
//! * `ready` - Scheduled, can be cancelled back to draft
//! * `sent` - Delivered; statistics become available
//!
//! # Campaign Types
//!
//! * `regular` - A single email
//! * `ab` - A/B split test between two variants
//! * `resend` - Regular campaign resent to non-openers
//! * `rss` - Built from an RSS feed (list filter only)
//!
//! # Example
//!
//! ```rust,no_run
//! use mailerlite::api::resources::campaigns::{
//!     CampaignEmail, CampaignType, CreateUpdateCampaignParams, Delivery, ScheduleCampaignParams,
//! };
//! use mailerlite::{ApiResponse, MailerLite};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("api-key")?;
//!
//! let params = CreateUpdateCampaignParams {
//!     name: "October newsletter".to_string(),
//!     campaign_type: CampaignType::Regular,
//!     emails: vec![CampaignEmail {
//!         subject: "What's new".to_string(),
//!         from_name: "Jane".to_string(),
//!         from: "jane@example.com".to_string(),
//!         content: None,
//!     }],
//!     ..Default::default()
//! };
//!
//! if let ApiResponse::Success { data } = client.campaigns.create(&params).await? {
//!     let schedule = ScheduleCampaignParams::new(Delivery::Instant);
//!     client.campaigns.schedule(&data.data.id, &schedule).await?;
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent, Stats};
use crate::error::Result;

/// Lifecycle state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Sent,
    Draft,
    Ready,
}

/// Kind of campaign.
///
/// `Rss` is only meaningful as a list filter; it cannot be created here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Regular,
    Ab,
    Resend,
    Rss,
}

/// Filter block of a campaign listing (`filter[status]`, `filter[type]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
}

/// Query parameters for listing campaigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetCampaignsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<CampaignFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// One email of a campaign being created or updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignEmail {
    pub subject: String,
    pub from_name: String,
    /// Sender address; must be a verified sender on the account.
    pub from: String,
    /// HTML content. Only accepted on the Advanced plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// What an A/B test varies between the two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbTestType {
    Subject,
    Sender,
    SendingTime,
}

/// Metric used to pick the winning version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WinnerMetric {
    #[serde(rename = "o")]
    Opens,
    #[serde(rename = "c")]
    Clicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
}

/// The B version of an A/B test. Unset values are copied from version A.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Settings of an `ab` campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<AbTestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_winner_by: Option<WinnerMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_time_unit: Option<TimeUnit>,
    /// Percentage of the audience that receives the test versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_split: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_value: Option<AbVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResendTestType {
    Subject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResendVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Settings of a `resend` campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResendSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<ResendTestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_winner_by: Option<WinnerMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b_value: Option<ResendVariant>,
}

/// Body for creating or updating a campaign.
///
/// # Fields
///
/// * `name` - Internal campaign name
/// * `language_id` - See the languages resource
/// * `campaign_type` - Sent as `type`
/// * `emails` - Exactly one email for every type
/// * `groups` / `segments` - Audience; leave both empty to target everyone
/// * `ab_settings` - Required when `campaign_type` is `ab`
/// * `resend_settings` - Required when `campaign_type` is `resend`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUpdateCampaignParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u64>,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub emails: Vec<CampaignEmail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ab_settings: Option<AbSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend_settings: Option<ResendSettings>,
}

/// How a campaign is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Instant,
    Scheduled,
    TimezoneBased,
    SmartSending,
}

/// Date and time for `scheduled` or `timezone_based` delivery.
///
/// `date` is `YYYY-MM-DD`; `hours` and `minutes` are zero-padded strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResendDelivery {
    Day,
    Scheduled,
}

/// Schedule of the resend step of a `resend` campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResendSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<ResendDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<u64>,
}

/// Body for scheduling a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCampaignParams {
    pub delivery: Delivery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resend: Option<ResendSchedule>,
}

impl ScheduleCampaignParams {
    /// Creates a schedule body with only the delivery mode set.
    pub fn new(delivery: Delivery) -> Self {
        Self {
            delivery,
            schedule: None,
            resend: None,
        }
    }
}

/// Tracking settings of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSettings {
    pub track_opens: Value,
    pub use_google_analytics: Value,
    pub ecommerce_tracking: Value,
}

/// One email of a campaign or automation as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    pub id: String,
    pub account_id: String,
    pub emailable_id: String,
    pub emailable_type: String,
    #[serde(rename = "type")]
    pub email_type: String,
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub plain_text: Option<String>,
    pub screenshot_url: Option<String>,
    pub preview_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub is_designed: bool,
    pub language_id: Value,
    pub is_winner: bool,
    pub stats: Stats,
    pub send_after: Option<String>,
    pub track_opens: bool,
}

/// A campaign as returned by the API.
///
/// `filter` and `filter_for_humans` describe the audience rules and are kept
/// as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignObject {
    pub id: String,
    pub account_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub status: String,
    pub missing_data: Vec<Value>,
    pub settings: CampaignSettings,
    pub filter: Value,
    pub filter_for_humans: Value,
    pub delivery_schedule: Option<String>,
    pub language_id: Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub scheduled_for: Option<String>,
    pub queued_at: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub stopped_at: Option<String>,
    pub default_email_id: Option<String>,
    pub emails: Vec<Email>,
    pub used_in_automations: bool,
    pub type_for_humans: Option<String>,
    pub stats: Stats,
    pub is_stopped: bool,
    pub has_winner: bool,
    pub winner_version_for_human: Option<String>,
    pub winner_sending_time_for_humans: Option<String>,
    pub winner_selected_manually_at: Option<String>,
    pub uses_ecommerce: bool,
    pub uses_survey: bool,
    pub can_be_scheduled: bool,
    pub warnings: Vec<Value>,
    pub initial_created_at: Option<String>,
    pub is_currently_sending_out: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Campaign list. `meta.extra["aggregations"]` holds per-status totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCampaignsResponse {
    pub data: Vec<CampaignObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleCampaignResponse {
    pub data: CampaignObject,
}

/// Campaigns façade.
#[derive(Debug, Clone)]
pub struct Campaigns {
    client: ApiClient,
}

resource!(Campaigns);

impl Campaigns {
    /// Lists campaigns.
    pub async fn get(
        &self,
        params: &GetCampaignsParams,
    ) -> Result<ApiResponse<ListCampaignsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/campaigns", options).await
    }

    /// Fetches one campaign.
    pub async fn find(&self, campaign_id: &str) -> Result<ApiResponse<SingleCampaignResponse>> {
        validate_id(campaign_id)?;

        self.client
            .discriminated_request(
                &format!("/api/campaigns/{}", campaign_id),
                RequestOptions::new(Method::GET),
            )
            .await
    }

    /// Creates a draft campaign.
    pub async fn create(
        &self,
        params: &CreateUpdateCampaignParams,
    ) -> Result<ApiResponse<SingleCampaignResponse>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/campaigns", options).await
    }

    /// Updates a draft campaign.
    pub async fn update(
        &self,
        campaign_id: &str,
        params: &CreateUpdateCampaignParams,
    ) -> Result<ApiResponse<SingleCampaignResponse>> {
        validate_id(campaign_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/campaigns/{}", campaign_id), options)
            .await
    }

    /// Schedules a draft campaign for delivery.
    pub async fn schedule(
        &self,
        campaign_id: &str,
        params: &ScheduleCampaignParams,
    ) -> Result<ApiResponse<SingleCampaignResponse>> {
        validate_id(campaign_id)?;

        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/campaigns/{}/schedule", campaign_id), options)
            .await
    }

    /// Cancels a `ready` campaign, returning it to draft.
    pub async fn cancel(&self, campaign_id: &str) -> Result<ApiResponse<SingleCampaignResponse>> {
        validate_id(campaign_id)?;

        self.client
            .discriminated_request(
                &format!("/api/campaigns/{}/cancel", campaign_id),
                RequestOptions::new(Method::POST),
            )
            .await
    }

    /// Deletes a campaign.
    pub async fn delete(&self, campaign_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(campaign_id)?;

        self.client
            .discriminated_request(
                &format!("/api/campaigns/{}", campaign_id),
                RequestOptions::new(Method::DELETE),
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
    use serde_json::json;

    #[test]
    fn test_filter_renames_type() {
        let params = GetCampaignsParams {
            filter: Some(CampaignFilter {
                status: Some(CampaignStatus::Draft),
                campaign_type: Some(CampaignType::Ab),
            }),
            limit: Some(10),
            page: None,
        };

        let query = serialize_query(&serde_json::to_value(&params).unwrap(), None);
        assert_eq!(query, "filter[status]=draft&filter[type]=ab&limit=10");
    }

    #[test]
    fn test_ab_settings_wire_values() {
        let params = CreateUpdateCampaignParams {
            name: "Split".to_string(),
            campaign_type: CampaignType::Ab,
            emails: vec![CampaignEmail {
                subject: "A".to_string(),
                from_name: "Jane".to_string(),
                from: "jane@example.com".to_string(),
                content: None,
            }],
            ab_settings: Some(AbSettings {
                test_type: Some(AbTestType::SendingTime),
                select_winner_by: Some(WinnerMetric::Opens),
                after_time_amount: Some(2),
                after_time_unit: Some(TimeUnit::Hours),
                test_split: Some(20),
                b_value: None,
            }),
            ..Default::default()
        };

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["type"], "ab");
        assert_eq!(body["ab_settings"]["test_type"], "sending_time");
        assert_eq!(body["ab_settings"]["select_winner_by"], "o");
        assert_eq!(body["ab_settings"]["after_time_unit"], "h");
        assert!(body.get("groups").is_none());
        assert!(body["emails"][0].get("content").is_none());
    }

    #[test]
    fn test_schedule_body() {
        let params = ScheduleCampaignParams {
            delivery: Delivery::TimezoneBased,
            schedule: Some(Schedule {
                date: Some("2026-11-01".to_string()),
                hours: Some("09".to_string()),
                minutes: Some("30".to_string()),
                timezone_id: None,
            }),
            resend: None,
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "delivery": "timezone_based",
                "schedule": {"date": "2026-11-01", "hours": "09", "minutes": "30"}
            })
        );
    }

    #[test]
    fn test_campaign_object_is_lenient() {
        let campaign: SingleCampaignResponse = serde_json::from_value(json!({
            "data": {
                "id": "1",
                "name": "Newsletter",
                "type": "regular",
                "status": "sent",
                "stats": {"sent": 100},
                "something_new": true
            }
        }))
        .unwrap();

        assert_eq!(campaign.data.campaign_type, "regular");
        assert_eq!(campaign.data.stats.sent, 100);
        assert_eq!(campaign.data.extra["something_new"], true);
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_before_network() {
        let campaigns = Campaigns::new(offline_client());

        assert!(matches!(campaigns.find("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(campaigns.cancel("a/b").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(campaigns.delete("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            campaigns
                .schedule("", &ScheduleCampaignParams::new(Delivery::Instant))
                .await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
