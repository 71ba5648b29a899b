// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::Result;
use crate::models::ApiConfig;

/// Media type selecting version 2 of the REST API.
pub const API_ACCEPT: &str = "application/vnd.pagerduty+json;version=2";

/// Create a configured asynchronous HTTP client.
///
/// Only static headers are installed here; credentials travel with the
/// session and are attached per request.
pub fn create_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(API_ACCEPT));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .default_headers(headers)
        .build()?;
    Ok(client)
}
