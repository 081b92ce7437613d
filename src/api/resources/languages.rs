//
//  mailerlite-rs
//  api/resources/languages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Campaign languages API.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::ApiResponse;
use crate::error::Result;

/// A language usable as a campaign's `language_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageObject {
    pub id: Value,
    pub shortcode: String,
    pub iso639: String,
    pub name: String,
    /// `ltr` or `rtl`.
    pub direction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLanguagesResponse {
    pub data: Vec<LanguageObject>,
}

/// Languages façade.
#[derive(Debug, Clone)]
pub struct Languages {
    client: ApiClient,
}

resource!(Languages);

impl Languages {
    pub async fn get(&self) -> Result<ApiResponse<ListLanguagesResponse>> {
        self.client
            .discriminated_request("/api/campaigns/languages", RequestOptions::new(Method::GET))
            .await
    }
}
