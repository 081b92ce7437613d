//
//  mailerlite-rs
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query String Serialization
//!
//! MailerLite expects nested filters in bracket notation and arrays as
//! repeated, unindexed bracket keys:
//!
//! | Parameter value | Query string |
//! |-----------------|--------------|
//! | `{"limit": 5}` | `limit=5` |
//! | `{"filter": {"status": "active"}}` | `filter[status]=active` |
//! | `{"group_ids": ["1", "2"]}` | `group_ids[]=1&group_ids[]=2` |
//!
//! Parameters arrive here as a [`serde_json::Value`] produced from the typed
//! option structs of each resource module, so any `Serialize` type can be
//! flattened.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Characters escaped in a query value: the same set `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Flattens a JSON value into a bracket-notation query string.
///
/// Keys are emitted as-is (brackets included) and values are
/// percent-encoded (a space becomes `%20`). `null` leaves and empty
/// containers contribute nothing.
/// Object keys appear in the map's iteration order.
///
/// # Parameters
///
/// * `params` - The value to flatten, normally a JSON object
/// * `prefix` - Key prefix used while recursing; pass `None` at the top level
///
/// # Returns
///
/// The `&`-joined pairs, or an empty string when there is nothing to send.
///
/// # Example
///
/// ```rust
/// use mailerlite::api::common::serialize_query;
/// use serde_json::json;
///
/// let query = serialize_query(&json!({"filter": {"status": "active"}, "limit": 5}), None);
/// assert_eq!(query, "filter[status]=active&limit=5");
///
/// assert_eq!(serialize_query(&json!({}), None), "");
/// ```
pub fn serialize_query(params: &Value, prefix: Option<&str>) -> String {
    let mut pairs = Vec::new();
    collect_pairs(params, prefix, &mut pairs);
    pairs.join("&")
}

fn collect_pairs(value: &Value, prefix: Option<&str>, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let key = match prefix {
                    Some(p) => format!("{}[{}]", p, key),
                    None => key.clone(),
                };
                collect_pairs(child, Some(&key), pairs);
            }
        }
        Value::Array(items) => {
            // A top-level array has no key to bracket; its elements are
            // flattened as if they were top-level values.
            let key = prefix.map(|p| format!("{}[]", p));
            for item in items {
                collect_pairs(item, key.as_deref(), pairs);
            }
        }
        Value::Null => {}
        scalar => {
            if let Some(key) = prefix {
                pairs.push(format!("{}={}", key, encode_scalar(scalar)));
            }
        }
    }
}

fn encode_scalar(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    utf8_percent_encode(&raw, COMPONENT).to_string()
}
