/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{StatusCode, Version};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Body returned by a successful login
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the protected endpoints
    pub token: String,
}

/// Profile of the authenticated user
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Mobile phone number
    #[serde(default)]
    pub mobile_number: Option<String>,
}

/// Fully read HTTP response
///
/// Returned for every call whatever the status code, so callers decide what
/// a 401 or a 400 means. The body is buffered once and can be inspected as
/// text, pretty-printed or decoded into a typed model.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: String,
    elapsed: Duration,
}

impl ApiResponse {
    /// Assembles a response from its parts
    pub fn new(
        status: StatusCode,
        version: Version,
        headers: HeaderMap,
        body: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            version,
            headers,
            body: body.into(),
            elapsed,
        }
    }

    /// Buffers a `reqwest` response, timing it from `started`
    pub async fn read(response: reqwest::Response, started: Instant) -> Result<Self, AppError> {
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, version, headers, body, started.elapsed()))
    }

    /// Status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Numeric status code
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Status line, e.g. `HTTP/1.1 200 OK`
    pub fn status_line(&self) -> String {
        format!("{:?} {}", self.version, self.status)
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of header `name`, if present and valid text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of the `Content-Type` header
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Raw body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Time between sending the request and finishing reading the body
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in whole milliseconds
    pub fn time_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Decodes the body as JSON into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body).map_err(|e| {
            AppError::Deserialization(format!("{e} (status {}, body: {})", self.status, self.body))
        })
    }

    /// Body re-indented when it is JSON, verbatim otherwise
    pub fn pretty(&self) -> String {
        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone()),
            Err(_) => self.body.clone(),
        }
    }

    /// Passes the response through when it is 2xx, otherwise maps the status to an error
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::from(self.status))
        }
    }
}
