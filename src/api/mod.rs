//
//  mailerlite-rs
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP plumbing and the typed resource façades for
//! the MailerLite REST API at `https://connect.mailerlite.com`.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Transport core (URL building, headers, body parsing)
//! - [`common`]: Response normalization, identifier validation, query
//!   serialization and shared wire types
//! - [`resources`]: One façade per API resource
//!
//! ## Usage
//!
//! Most callers go through [`MailerLite`](crate::MailerLite). The transport
//! can also be used directly for endpoints without a façade:
//!
//! ```rust,no_run
//! use mailerlite::api::{ApiClient, ApiResponse, RequestOptions};
//! use mailerlite::Config;
//! use reqwest::Method;
//! use serde_json::{json, Value};
//!
//! # async fn example() -> mailerlite::Result<()> {
//! let client = ApiClient::new(Config::new("api-key"))?;
//!
//! let options = RequestOptions::new(Method::GET).params(json!({"limit": 10}));
//! match client.discriminated_request::<Value>("/api/subscribers", options).await? {
//!     ApiResponse::Success { data } => println!("{}", data),
//!     ApiResponse::Failure { response } => eprintln!("failed with {}", response.status),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! HTTP status failures are returned as [`ApiResponse::Failure`] values.
//! Only problems that prevent a response from being observed at all (bad
//! arguments, network errors, undecodable success bodies) are `Err`.

/// Transport core: [`ApiClient`] and [`RequestOptions`].
pub mod client;

/// Shared response types and helpers.
///
/// Includes:
/// - [`RawResponse`] and [`ApiResponse`]
/// - [`to_discriminated`](common::to_discriminated) and [`validate_id`](common::validate_id)
/// - [`serialize_query`](common::serialize_query)
/// - Wire types used by several resources
pub mod common;

/// Resource façades.
pub mod resources;

pub use client::{ApiClient, RequestOptions};
pub use common::{ApiResponse, NoContent, RawResponse};
pub use resources::{
    automations, batches, campaigns, fields, forms, groups, languages, segments, stats,
    subscribers, timezones, webhooks, Resource,
};
