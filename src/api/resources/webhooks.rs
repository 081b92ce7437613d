//
//  mailerlite-rs
//  api/resources/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhooks API.
//!
//! Webhooks push account events (`subscriber.created`,
//! `campaign.sent`, ...) to a URL. The `secret` returned on each webhook
//! signs the payloads MailerLite sends.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent};
use crate::error::Result;

/// Mutable webhook attributes. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Body for creating a webhook. `events` and `url` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookParams {
    pub events: Vec<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookObject {
    pub id: String,
    pub name: Option<String>,
    pub url: String,
    pub events: Vec<String>,
    pub enabled: bool,
    pub secret: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListWebhooksResponse {
    pub data: Vec<WebhookObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleWebhookResponse {
    pub data: WebhookObject,
}

/// Webhooks façade.
#[derive(Debug, Clone)]
pub struct Webhooks {
    client: ApiClient,
}

resource!(Webhooks);

impl Webhooks {
    pub async fn get(&self) -> Result<ApiResponse<ListWebhooksResponse>> {
        self.client
            .discriminated_request("/api/webhooks", RequestOptions::new(Method::GET))
            .await
    }

    pub async fn find(&self, webhook_id: &str) -> Result<ApiResponse<SingleWebhookResponse>> {
        validate_id(webhook_id)?;

        self.client
            .discriminated_request(
                &format!("/api/webhooks/{}", webhook_id),
                RequestOptions::new(Method::GET),
            )
            .await
    }

    pub async fn create(
        &self,
        params: &CreateWebhookParams,
    ) -> Result<ApiResponse<SingleWebhookResponse>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/webhooks", options).await
    }

    pub async fn update(
        &self,
        webhook_id: &str,
        params: &UpdateWebhookParams,
    ) -> Result<ApiResponse<SingleWebhookResponse>> {
        validate_id(webhook_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/webhooks/{}", webhook_id), options)
            .await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(webhook_id)?;

        self.client
            .discriminated_request(
                &format!("/api/webhooks/{}", webhook_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::resources::test_support::offline_client;
    use crate::api::resources::Resource;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_partial_update_body() {
        let params = UpdateWebhookParams {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"enabled": false}));
    }

    #[test]
    fn test_create_body() {
        let params = CreateWebhookParams {
            events: vec!["subscriber.created".to_string()],
            url: "https://example.com/hook".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"events": ["subscriber.created"], "url": "https://example.com/hook"})
        );
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_before_network() {
        let webhooks = Webhooks::new(offline_client());

        assert!(matches!(webhooks.find("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(webhooks.delete("").await, Err(Error::InvalidArgument(_))));
        assert!(matches!(
            webhooks.update("?", &UpdateWebhookParams::default()).await,
            Err(Error::InvalidArgument(_))
        ));
    }
}
