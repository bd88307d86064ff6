//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use mojang_api::RawResponse;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

/// A 200 response with a JSON content type and the given body.
pub fn json_response(body: &str) -> RawResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    RawResponse::new(StatusCode::OK, body).with_headers(headers)
}

/// A response with an arbitrary status and no headers.
pub fn status_response(status: u16, body: &str) -> RawResponse {
    let status = StatusCode::from_u16(status).unwrap();
    RawResponse::new(status, body)
}
