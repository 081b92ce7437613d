//
//  mailerlite-rs
//  api/resources/forms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Forms API.
//!
//! Forms are listed per type; the type is part of the path
//! (`/api/forms/popup`). Individual forms are addressed by ID.

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::{validate_id, ApiResponse, Links, Meta, NoContent, Rate};
use crate::error::Result;

/// Kind of signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Popup,
    Embedded,
    Promotion,
}

impl FormType {
    /// Path segment and aggregation key of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popup => "popup",
            Self::Embedded => "embedded",
            Self::Promotion => "promotion",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key for form listings. `*Desc` variants sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormSort {
    #[serde(rename = "created_at")]
    CreatedAt,
    #[serde(rename = "-created_at")]
    CreatedAtDesc,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "-name")]
    NameDesc,
    #[serde(rename = "conversions_count")]
    ConversionsCount,
    #[serde(rename = "-conversions_count")]
    ConversionsCountDesc,
    #[serde(rename = "opens_count")]
    OpensCount,
    #[serde(rename = "-opens_count")]
    OpensCountDesc,
    #[serde(rename = "visitors")]
    Visitors,
    #[serde(rename = "-visitors")]
    VisitorsDesc,
    #[serde(rename = "conversion_rate")]
    ConversionRate,
    #[serde(rename = "-conversion_rate")]
    ConversionRateDesc,
    #[serde(rename = "last_registration_at")]
    LastRegistrationAt,
    #[serde(rename = "-last_registration_at")]
    LastRegistrationAtDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFilter {
    /// Partial, case-insensitive match on the form name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query parameters for listing forms of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetFormsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FormFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<FormSort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFormParams {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPermissions {
    pub update: bool,
}

/// A form as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormObject {
    pub id: String,
    #[serde(rename = "type")]
    pub form_type: String,
    pub slug: String,
    pub name: String,
    pub created_at: Option<String>,
    pub conversions_count: u64,
    pub opens_count: u64,
    pub conversion_rate: Rate,
    pub settings: Value,
    pub last_registration_at: Option<String>,
    pub active: bool,
    pub is_broken: bool,
    pub has_content: bool,
    pub can: FormPermissions,
    pub used_in_automations: bool,
    pub warnings: Vec<Value>,
    pub double_optin: Value,
    pub screenshot_url: Option<String>,
}

/// Form list. `meta.extra["aggregations"]` holds the count per form type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFormsResponse {
    pub data: Vec<FormObject>,
    pub links: Links,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleFormResponse {
    pub data: FormObject,
}

/// Forms façade.
#[derive(Debug, Clone)]
pub struct Forms {
    client: ApiClient,
}

resource!(Forms);

impl Forms {
    /// Lists forms of one type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mailerlite::api::resources::forms::{FormSort, FormType, GetFormsParams};
    /// use mailerlite::MailerLite;
    ///
    /// # async fn example() -> mailerlite::Result<()> {
    /// let client = MailerLite::new("api-key")?;
    /// let params = GetFormsParams { sort: Some(FormSort::NameDesc), ..Default::default() };
    /// let popups = client.forms.get(FormType::Popup, &params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(
        &self,
        form_type: FormType,
        params: &GetFormsParams,
    ) -> Result<ApiResponse<ListFormsResponse>> {
        let options = RequestOptions::new(Method::GET).params(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/forms/{}", form_type), options)
            .await
    }

    /// Renames a form.
    pub async fn update(
        &self,
        form_id: &str,
        params: &UpdateFormParams,
    ) -> Result<ApiResponse<SingleFormResponse>> {
        validate_id(form_id)?;

        let options = RequestOptions::new(Method::PUT).body(serde_json::to_value(params)?);
        self.client
            .discriminated_request(&format!("/api/forms/{}", form_id), options)
            .await
    }

    /// Deletes a form.
    pub async fn delete(&self, form_id: &str) -> Result<ApiResponse<NoContent>> {
        validate_id(form_id)?;

        self.client
            .discriminated_request(
                &format!("/api/forms/{}", form_id),
                RequestOptions::new(Method::DELETE),
            )
            .await
    }
}
