//
//  mailerlite-rs
//  api/resources/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Aggregate statistics.
//!
//! The [`Statistics`] façade gathers the read-only reporting views spread
//! across campaigns, forms and automations. Most methods are plain
//! discriminated requests; a few unwrap the response and extract one value:
//!
//! | Method | Returns | On missing data |
//! |--------|---------|-----------------|
//! | [`Statistics::get_sent_campaigns`] | the campaign list | `RequestFailed` on non-2xx |
//! | [`Statistics::get_sent_campaign_stats`] | `data.stats` | `StatsUnavailable` |
//! | [`Statistics::get_forms_count_by_type`] | `meta.aggregations[type]` | `StatsUnavailable` |
//! | [`Statistics::get_automation_stats`] | `data.stats` | `StatsUnavailable` |
//!
//! # Example
//!
//! ```rust,no_run
//! use mailerlite::api::resources::forms::FormType;
//! use mailerlite::MailerLite;
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = MailerLite::new("api-key")?;
//!
//! let stats = client.stats.get_sent_campaign_stats("81828279399285728").await?;
//! println!("open rate: {}", stats.open_rate.string);
//!
//! let popups = client.stats.get_forms_count_by_type(FormType::Popup).await?;
//! println!("{} popup forms", popups);
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::automations::{
    AutomationStats, AutomationSubsParams, AutomationSubsResponse, GetAutomationsParams,
    ListAutomationsResponse,
};
use super::campaigns::{CampaignFilter, CampaignStatus, GetCampaignsParams, ListCampaignsResponse};
use super::forms::{FormType, GetFormsParams, ListFormsResponse};
use super::subscribers::ListSubscribersResponse;
use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{
    validate_id, ApiResponse, Links, Meta, RawResponse, Stats, SubscriberObject, SubscriberStatus,
};
use crate::error::{Error, Result};

const NO_STATS: &str = "No stats available.";
const NO_STATS_NOT_SENT: &str = "No stats available. See if ID of a sent campaign was provided.";
const NO_STATS_BAD_ID: &str = "No stats available. See if correct ID was provided.";

/// Kind of subscriber activity on a sent campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Opened,
    Unopened,
    Clicked,
    Unsubscribed,
    Forwarded,
    Hardbounced,
    Softbounced,
    Junk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySort {
    Id,
    UpdatedAt,
    ClicksCount,
    OpensCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityInclude {
    Subscriber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Body of a subscriber-activity report request.
///
/// # Fields
///
/// * `filter` - Activity type and free-text search
/// * `limit` - One of 10, 25, 50 or 100
/// * `sort` - Sort key
/// * `page` - Page number
/// * `include` - Embed the full subscriber on each row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignSubscribersActivityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ActivityFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ActivitySort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<ActivityInclude>,
}

/// One row of a subscriber-activity report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityObject {
    pub id: String,
    pub opens_count: u64,
    pub clicks_count: u64,
    /// Present only when requested with [`ActivityInclude::Subscriber`].
    pub subscriber: Option<SubscriberObject>,
}

/// Per-type totals of a subscriber-activity report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCounts {
    pub all: u64,
    pub opened: u64,
    pub unopened: u64,
    pub clicked: u64,
    pub unsubscribed: u64,
    pub forwarded: u64,
    pub hardbounced: u64,
    pub softbounced: u64,
    pub junk: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMeta {
    pub counts: ActivityCounts,
    #[serde(flatten)]
    pub page: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSubscribersActivityResponse {
    pub data: Vec<ActivityObject>,
    pub links: Links,
    pub meta: ActivityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSubscriberFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriberStatus>,
}

/// Query parameters for listing the subscribers who signed up via a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormsSubscribersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FormSubscriberFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Deprecated; prefer `cursor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Statistics façade.
#[derive(Debug, Clone)]
pub struct Statistics {
    client: ApiClient,
}

resource!(Statistics);

impl Statistics {
    /// Lists sent campaigns.
    ///
    /// The status filter is forced to `sent`; a campaign type filter from
    /// `params` is kept. The official JavaScript SDK replaces the whole
    /// filter here and so drops `filter[type]`. The response is unwrapped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] when the server answers with a
    /// non-2xx status.
    pub async fn get_sent_campaigns(&self, params: &GetCampaignsParams) -> Result<ListCampaignsResponse> {
        let params = sent_only(params);
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(&params)?);
        self.client
            .request("/api/campaigns", options)
            .await?
            .unwrap_if_ok()
    }

    /// Returns the statistics of a sent campaign.
    ///
    /// # Errors
    ///
    /// - [`Error::RequestFailed`] when the server answers with a non-2xx status
    /// - [`Error::StatsUnavailable`] when the campaign has no statistics,
    ///   with a hint when the campaign exists but was not sent
    pub async fn get_sent_campaign_stats(&self, campaign_id: &str) -> Result<Stats> {
        validate_id(campaign_id)?;

        let raw = self
            .client
            .request(
                &format!("/api/campaigns/{}", campaign_id),
                RequestOptions::new(Method::GET),
            )
            .await?;
        let status = raw.status;
        let body: Value = raw.unwrap_if_ok()?;

        let campaign = body.get("data").filter(|d| !d.is_null());
        if let Some(stats) = campaign.and_then(|c| c.get("stats")).filter(|s| !s.is_null()) {
            return decode_stats(status, stats.clone());
        }

        match campaign {
            Some(c) if c.get("status").and_then(Value::as_str) != Some("sent") => {
                Err(Error::StatsUnavailable(NO_STATS_NOT_SENT.to_string()))
            }
            _ => Err(Error::StatsUnavailable(NO_STATS_BAD_ID.to_string())),
        }
    }

    /// Lists who opened, clicked or otherwise acted on a sent campaign.
    pub async fn get_sent_campaign_subscribers(
        &self,
        campaign_id: &str,
        params: &CampaignSubscribersActivityParams,
    ) -> Result<ApiResponse<CampaignSubscribersActivityResponse>> {
        validate_id(campaign_id)?;

        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(
                &format!("/api/campaigns/{}/reports/subscriber-activity", campaign_id),
                options,
            )
            .await
    }

    /// Lists forms of one type together with their conversion figures.
    pub async fn get_forms_by_type(
        &self,
        form_type: FormType,
        params: &GetFormsParams,
    ) -> Result<ApiResponse<ListFormsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/forms/{}", form_type), options)
            .await
    }

    /// Returns how many forms of a type exist on the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatsUnavailable`] when the response carries no
    /// aggregation for the type, whatever its status.
    pub async fn get_forms_count_by_type(&self, form_type: FormType) -> Result<u64> {
        let raw = self
            .client
            .request(
                &format!("/api/forms/{}", form_type),
                RequestOptions::new(Method::GET),
            )
            .await?;

        form_count(&raw, form_type).ok_or_else(|| Error::StatsUnavailable(NO_STATS.to_string()))
    }

    /// Lists the subscribers who signed up through a form.
    pub async fn get_form_subscribers(
        &self,
        form_id: &str,
        params: &FormsSubscribersParams,
    ) -> Result<ApiResponse<ListSubscribersResponse>> {
        validate_id(form_id)?;

        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/forms/{}/subscribers", form_id), options)
            .await
    }

    pub async fn get_automations(
        &self,
        params: &GetAutomationsParams,
    ) -> Result<ApiResponse<ListAutomationsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/automations", options).await
    }

    /// Returns the statistics of an automation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatsUnavailable`] when the response has no
    /// `data.stats`, including every non-2xx response.
    pub async fn get_automation_stats(&self, automation_id: &str) -> Result<AutomationStats> {
        validate_id(automation_id)?;

        let raw = self
            .client
            .request(
                &format!("/api/automations/{}", automation_id),
                RequestOptions::new(Method::GET),
            )
            .await?;

        let stats = raw
            .data
            .as_ref()
            .and_then(|body| body.get("data"))
            .and_then(|data| data.get("stats"))
            .filter(|stats| !stats.is_null())
            .cloned()
            .ok_or_else(|| Error::StatsUnavailable(NO_STATS.to_string()))?;

        decode_stats(raw.status, stats)
    }

    pub async fn get_automation_subscribers(
        &self,
        automation_id: &str,
        params: &AutomationSubsParams,
    ) -> Result<ApiResponse<AutomationSubsResponse>> {
        validate_id(automation_id)?;

        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/automations/{}/activity", automation_id), options)
            .await
    }
}

fn sent_only(params: &GetCampaignsParams) -> GetCampaignsParams {
    let mut params = params.clone();
    params
        .filter
        .get_or_insert_with(CampaignFilter::default)
        .status = Some(CampaignStatus::Sent);
    params
}

fn decode_stats<T: serde::de::DeserializeOwned>(status: u16, stats: Value) -> Result<T> {
    serde_json::from_value(stats).map_err(|source| Error::Decode { status, source })
}

/// Reads `meta.aggregations[type]` from a form listing.
fn form_count(raw: &RawResponse, form_type: FormType) -> Option<u64> {
    raw.data
        .as_ref()?
        .get("meta")?
        .get("aggregations")?
        .get(form_type.as_str())?
        .as_u64()
}
