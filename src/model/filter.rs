/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request/response observation hooks
//!
//! Filters are handed to [`HttpClient`](crate::model::http::HttpClient) when it
//! is built and run, in order, around every call. They only observe: a filter
//! cannot change the request that goes out or the response that comes back.

use crate::model::responses::ApiResponse;
use reqwest::Request;
use reqwest::header::HeaderMap;
use std::borrow::Cow;
use tracing::info;

/// Hook invoked around every HTTP call
pub trait RequestFilter: Send + Sync {
    /// Called with the fully built request right before it is sent
    fn on_request(&self, _request: &Request) {}

    /// Called once the response body has been read
    fn on_response(&self, _response: &ApiResponse) {}
}

/// Writes each request and response to the tracing log at `INFO`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerFilter;

impl LoggerFilter {
    /// Creates the filter
    pub fn new() -> Self {
        Self
    }
}

impl RequestFilter for LoggerFilter {
    fn on_request(&self, request: &Request) {
        info!("Request Method: {}", request.method());
        info!("Request URI: {}", request.url());
        info!("Request Headers: {}", format_headers(request.headers()));
        info!("Request Payload: {}", request_payload(request));
    }

    fn on_response(&self, response: &ApiResponse) {
        info!("Status Code: {}", response.status_code());
        info!("Response Headers: {}", format_headers(response.headers()));
        info!("Response Body: {}", response.pretty());
        info!("Response Time: {}ms", response.time_ms());
        info!("Response Status Line: {}", response.status_line());
        info!(
            "Response Content Type: {}",
            response.content_type().unwrap_or("")
        );
    }
}

/// Renders headers as `name=value` pairs separated by `; `
pub fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            format!("{}={}", name, value.to_str().unwrap_or("<binary>"))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn request_payload(request: &Request) -> Cow<'_, str> {
    match request.body().and_then(|body| body.as_bytes()) {
        Some(bytes) => String::from_utf8_lossy(bytes),
        None => Cow::Borrowed("No Body"),
    }
}
