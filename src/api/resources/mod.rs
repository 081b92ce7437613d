//
//  mailerlite-rs
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! MailerLite resource façades.
//!
//! Each submodule holds the request and response types of one API resource
//! together with a façade struct exposing one async method per operation.
//! Façades are independent of each other; they share only the
//! [`ApiClient`] they were built with.
//!
//! # Module Organization
//!
//! | Module | Façade | Endpoints |
//! |--------|--------|-----------|
//! | [`subscribers`] | [`Subscribers`] | `/api/subscribers` |
//! | [`campaigns`] | [`Campaigns`] | `/api/campaigns` |
//! | [`forms`] | [`Forms`] | `/api/forms` |
//! | [`groups`] | [`Groups`] | `/api/groups`, `/api/subscribers/{id}/groups` |
//! | [`segments`] | [`Segments`] | `/api/segments` |
//! | [`fields`] | [`Fields`] | `/api/fields` |
//! | [`automations`] | [`Automations`] | `/api/automations` |
//! | [`timezones`] | [`Timezones`] | `/api/timezones` |
//! | [`languages`] | [`Languages`] | `/api/campaigns/languages` |
//! | [`batches`] | [`Batches`] | `/api/batch` |
//! | [`webhooks`] | [`Webhooks`] | `/api/webhooks` |
//! | [`stats`] | [`Statistics`] | read-only views over campaigns, forms and automations |
//!
//! # Notes
//!
//! - Every method that puts an identifier into the path validates it first
//!   with [`validate_id`](crate::api::common::validate_id)
//! - Option structs skip `None` fields, so only what the caller set is sent
//! - Response types decode leniently; unknown keys are ignored

use super::client::ApiClient;

/// Implements [`Resource`] for a façade struct with a single `client` field.
///
/// Defined ahead of the `mod` declarations so every resource module sees it.
macro_rules! resource {
    ($name:ident) => {
        impl $crate::api::resources::Resource for $name {
            fn new(client: $crate::api::client::ApiClient) -> Self {
                Self { client }
            }
        }
    };
}

pub mod automations;
pub mod batches;
pub mod campaigns;
pub mod fields;
pub mod forms;
pub mod groups;
pub mod languages;
pub mod segments;
pub mod stats;
pub mod subscribers;
pub mod timezones;
pub mod webhooks;

pub use automations::Automations;
pub use batches::Batches;
pub use campaigns::Campaigns;
pub use fields::Fields;
pub use forms::Forms;
pub use groups::Groups;
pub use languages::Languages;
pub use segments::Segments;
pub use stats::Statistics;
pub use subscribers::Subscribers;
pub use timezones::Timezones;
pub use webhooks::Webhooks;

/// A resource façade bound to a transport.
///
/// # Example
///
/// ```rust
/// use mailerlite::api::resources::{Resource, Timezones};
/// use mailerlite::api::ApiClient;
/// use mailerlite::Config;
///
/// let client = ApiClient::new(Config::new("api-key"))?;
/// let timezones = Timezones::new(client);
/// # Ok::<(), mailerlite::Error>(())
/// ```
pub trait Resource {
    /// Creates the façade around a transport handle.
    fn new(client: ApiClient) -> Self;
}
