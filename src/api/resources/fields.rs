//
//  mailerlite-rs
//  api/resources/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom fields API.
//!
//! Fields define the extra attributes stored on every subscriber. A field's
//! `key` is what appears in [`SubscriberObject::fields`](crate::api::common::SubscriberObject::fields).

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent};
use crate::error::Result;

/// Data type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldSort {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "-name")]
    NameDesc,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "-type")]
    TypeDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetFieldsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FieldFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<FieldSort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFieldParams {
    pub name: String,
}

/// Body for creating a field: a name plus a type that cannot change later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFieldParams {
    #[serde(flatten)]
    pub update: UpdateFieldParams,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl CreateFieldParams {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            update: UpdateFieldParams { name: name.into() },
            field_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldObject {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFieldsResponse {
    pub data: Vec<FieldObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleFieldResponse {
    pub data: FieldObject,
}

/// Fields façade.
#[derive(Debug, Clone)]
pub struct Fields {
    client: ApiClient,
}

resource!(Fields);

impl Fields {
    pub async fn get(&self, params: &GetFieldsParams) -> Result<ApiResponse<ListFieldsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/fields", options).await
    }

    pub async fn create(&self, params: &CreateFieldParams) -> Result<ApiResponse<SingleFieldResponse>> {
        let options = RequestOptions::new(Method::POST).body(serde_json::to_value(params)?);
        self.client.discriminated_request("/api/fields", options).await
    }

    /// Renames a field. The key and type stay the same.
    pub async fn update(
        &self,
        field_id: &str,
        params: &UpdateFieldParams,
    ) -> Result<ApiResponse<SingleFieldResponse>> {
        validate_id(field_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/fields/{}", field_id), options)
            .await
    }

    pub async fn delete(&self, field_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(field_id)?;

        self.client
            .discriminated_request(
                &format!("/api/fields/{}", field_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }
}
