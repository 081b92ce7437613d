//
//  mailerlite-rs
//  api/resources/automations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Automations API types and façade.
//!
//! Automations are workflows started by a trigger (joining a group,
//! completing a form, a date field) that walk each subscriber through a
//! series of steps. The API is read-only: automations can be listed, fetched
//! and their per-subscriber activity inspected.
//!
//! # Activity Filters
//!
//! [`AutomationSubsParams`] requires a status and accepts date windows as
//! [`chrono::NaiveDate`] values, which go on the wire as `YYYY-MM-DD`:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mailerlite::api::common::serialize_query;
//! use mailerlite::api::resources::automations::{
//!     AutomationSubsFilter, AutomationSubsParams, AutomationSubscriberStatus,
//! };
//!
//! let params = AutomationSubsParams {
//!     filter: AutomationSubsFilter {
//!         date_from: NaiveDate::from_ymd_opt(2026, 1, 1),
//!         ..AutomationSubsFilter::new(AutomationSubscriberStatus::Completed)
//!     },
//!     limit: Some(10),
//!     page: None,
//! };
//!
//! let query = serialize_query(&serde_json::to_value(&params).unwrap(), None);
//! assert_eq!(query, "filter[date_from]=2026-01-01&filter[status]=completed&limit=10");
//! ```

use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::campaigns::Email;
use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, Rate};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutomationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only automations triggered by this group ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Query parameters for listing automations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetAutomationsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<AutomationFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Where a subscriber is in an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationSubscriberStatus {
    Completed,
    Active,
    Canceled,
    Failed,
}

/// Filter block of an activity query. `status` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationSubsFilter {
    pub status: AutomationSubscriberStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_to: Option<NaiveDate>,
    /// Deprecated alias of `search`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl AutomationSubsFilter {
    /// Creates a filter with only the status set.
    pub fn new(status: AutomationSubscriberStatus) -> Self {
        Self {
            status,
            date_from: None,
            date_to: None,
            scheduled_from: None,
            scheduled_to: None,
            keyword: None,
            search: None,
        }
    }
}

/// Query parameters for an automation's subscriber activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationSubsParams {
    pub filter: AutomationSubsFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl AutomationSubsParams {
    pub fn new(status: AutomationSubscriberStatus) -> Self {
        Self {
            filter: AutomationSubsFilter::new(status),
            limit: None,
            page: None,
        }
    }
}

/// Statistics of an automation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationStats {
    pub completed_subscribers_count: u64,
    pub subscribers_in_queue_count: u64,
    pub bounce_rate: Rate,
    pub click_to_open_rate: Rate,
    pub sent: u64,
    pub opens_count: u64,
    pub unique_opens_count: u64,
    pub open_rate: Rate,
    pub clicks_count: u64,
    pub unique_clicks_count: u64,
    pub click_rate: Rate,
    pub unsubscribes_count: u64,
    pub unsubscribe_rate: Rate,
    pub spam_count: u64,
    pub spam_rate: Rate,
    pub hard_bounces_count: u64,
    pub hard_bounce_rate: Rate,
    pub soft_bounces_count: u64,
    pub soft_bounce_rate: Rate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerData {
    pub track_ecommerce: bool,
    pub repeatable: bool,
    pub valid: bool,
}

/// One step of an automation.
///
/// Steps come in several shapes (delays, conditions, emails); fields that do
/// not apply to a step's `type` are left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationStep {
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub parent_id: Option<String>,
    pub complete: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub value: Option<String>,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub from: Option<String>,
    pub from_name: Option<String>,
    pub email_id: Option<String>,
    pub email: Option<Email>,
    pub language_id: Value,
    pub track_opens: bool,
    pub google_analytics: Value,
    pub tracking_was_disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerGroup {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationTrigger {
    pub id: String,
    #[serde(rename = "type")]
    pub trigger_type: String,
    pub group_ids: Vec<String>,
    pub groups: Vec<TriggerGroup>,
    pub exclude_group_ids: Vec<String>,
    pub excluded_groups: Vec<Value>,
    pub broken: bool,
}

/// An automation as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationObject {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub trigger_data: TriggerData,
    pub steps: Vec<AutomationStep>,
    pub triggers: Vec<AutomationTrigger>,
    pub complete: bool,
    pub broken: bool,
    pub warnings: Vec<Value>,
    pub emails_count: Option<u64>,
    pub first_email_screenshot_url: Option<String>,
    pub stats: AutomationStats,
    pub created_at: Option<String>,
    pub has_banned_content: bool,
    pub qualified_subscribers_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSubscriberRef {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepRun {
    pub id: String,
    pub step_id: String,
    pub description: Option<String>,
    pub scheduled_for: Option<String>,
}

/// One subscriber's run through an automation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSubObject {
    pub id: String,
    pub status: String,
    pub date: Option<String>,
    pub reason: Option<String>,
    pub reason_description: Option<String>,
    pub subscriber: AutomationSubscriberRef,
    #[serde(rename = "stepRuns")]
    pub step_runs: Vec<StepRun>,
    #[serde(rename = "currentStep")]
    pub current_step: Option<AutomationStep>,
    pub language_id: Value,
    pub complete: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub track_opens: bool,
    pub google_analytics: Value,
    pub tracking_was_disabled: bool,
    pub description: Option<String>,
}

/// Automation list. `meta.extra["total_unfiltered"]` counts all automations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAutomationsResponse {
    pub data: Vec<AutomationObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleAutomationResponse {
    pub data: AutomationObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationSubsResponse {
    pub data: Vec<AutomationSubObject>,
    pub links: Links,
    pub meta: Meta,
}

/// Automations façade.
#[derive(Debug, Clone)]
pub struct Automations {
    client: ApiClient,
}

resource!(Automations);

impl Automations {
    pub async fn get(
        &self,
        params: &GetAutomationsParams,
    ) -> Result<ApiResponse<ListAutomationsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/automations", options).await
    }

    pub async fn find(&self, automation_id: &str) -> Result<ApiResponse<SingleAutomationResponse>> {
        validate_id(automation_id)?;

        self.client
            .discriminated_request(
                &format!("/api/automations/{}", automation_id),
                RequestOptions::new(Method::GET),
            )
            .await
    }

    /// Lists subscriber activity within an automation.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::serialize_query;
    use crate::api::resources::test_support::offline_client;
    use crate::api::resources::Resource;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_list_filter_query() {
        let params = GetAutomationsParams {
            filter: Some(AutomationFilter {
                enabled: Some(true),
                name: None,
                group: Some("42".to_string()),
            }),
            limit: Some(10),
            page: Some(1),
        };

        let query = serialize_query(&serde_json::to_value(&params).unwrap(), None);
        assert_eq!(query, "filter[enabled]=true&filter[group]=42&limit=10&page=1");
    }

    #[test]
    fn test_activity_dates_render_as_iso() {
        let mut params = AutomationSubsParams::new(AutomationSubscriberStatus::Canceled);
        params.filter.scheduled_to = NaiveDate::from_ymd_opt(2026, 12, 31);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"filter": {"status": "canceled", "scheduled_to": "2026-12-31"}})
        );
    }

    #[test]
    fn test_activity_object_renames_camel_case_keys() {
        let activity: AutomationSubObject = serde_json::from_value(json!({
            "id": "9",
            "status": "active",
            "subscriber": {"id": "1", "email": "a@example.com"},
            "stepRuns": [{"id": "r1", "step_id": "s1"}],
            "currentStep": {"id": "s1", "type": "delay", "unit": "days", "value": "1"}
        }))
        .unwrap();

        assert_eq!(activity.step_runs.len(), 1);
        let step = activity.current_step.unwrap();
        assert_eq!(step.step_type, "delay");
        assert_eq!(step.unit.as_deref(), Some("days"));
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_before_network() {
        let automations = Automations::new(offline_client());

        assert!(matches!(automations.find("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            automations
                .get_automation_subscribers(
                    "",
                    &AutomationSubsParams::new(AutomationSubscriberStatus::Active)
                )
                .await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
