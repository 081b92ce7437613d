//
//  mailerlite-rs
//  api/common/types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Wire types shared by several resources.
//!
//! List endpoints wrap their items in an envelope with [`Links`] and a
//! [`Meta`] block. Campaign, form and automation objects carry the same
//! [`Stats`] shape. Every struct here decodes leniently: a missing field
//! falls back to its default instead of failing the whole response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pagination links of a list envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// One entry of the page links rendered in [`Meta::links`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Page-based pagination metadata.
///
/// Cursor-paginated endpoints fill `next_cursor`/`prev_cursor` instead of the
/// page counters. Resource-specific extras (such as form aggregations) land
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub current_page: Option<u64>,
    pub from: Option<u64>,
    pub last_page: Option<u64>,
    pub links: Vec<MetaLink>,
    pub path: String,
    pub per_page: Option<u64>,
    pub to: Option<u64>,
    pub total: Option<u64>,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A ratio reported both as a number and as display text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    pub float: f64,
    pub string: String,
}

/// Delivery statistics of a campaign, form or automation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
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
    pub forwards_count: u64,
    pub click_to_open_rate: Rate,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Subscription status of a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Unsubscribed,
    Unconfirmed,
    Bounced,
    Junk,
}

/// A subscriber as returned by subscriber, group, segment and form endpoints.
///
/// `status` stays a string so that statuses added to the API later do not
/// break decoding; compare it with [`SubscriberStatus`] values when needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberObject {
    pub id: String,
    pub email: String,
    pub status: String,
    pub source: String,
    pub sent: u64,
    pub opens_count: u64,
    pub clicks_count: u64,
    pub open_rate: f64,
    pub click_rate: f64,
    pub ip_address: Option<String>,
    pub subscribed_at: Option<String>,
    pub unsubscribed_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub fields: Map<String, Value>,
    pub groups: Vec<Value>,
    pub opted_in_at: Option<String>,
    pub optin_ip: Option<String>,
}
