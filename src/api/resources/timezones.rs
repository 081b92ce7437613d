//
//  mailerlite-rs
//  api/resources/timezones.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Timezones API.
//!
//! The timezone IDs listed here are what [`Schedule::timezone_id`](super::campaigns::Schedule::timezone_id)
//! expects.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::{ApiClient, RequestOptions};
use crate::api::common::ApiResponse;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimezoneObject {
    pub id: Value,
    pub name: String,
    pub name_for_humans: String,
    pub offset_name: String,
    /// Offset from UTC in seconds.
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTimezonesResponse {
    pub data: Vec<TimezoneObject>,
}

/// Timezones façade.
#[derive(Debug, Clone)]
pub struct Timezones {
    client: ApiClient,
}

resource!(Timezones);

impl Timezones {
    /// Lists every timezone the API knows about.
    pub async fn get(&self) -> Result<ApiResponse<ListTimezonesResponse>> {
        self.client
            .discriminated_request("/api/timezones", RequestOptions::new(Method::GET))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_timezones() {
        let response: ListTimezonesResponse = serde_json::from_value(json!({
            "data": [{
                "id": 70,
                "name": "Africa/Harare",
                "name_for_humans": "Harare",
                "offset_name": "+02:00",
                "offset": 7200
            }]
        }))
        .unwrap();

        assert_eq!(response.data[0].name, "Africa/Harare");
        assert_eq!(response.data[0].offset, 7200);
    }
}
