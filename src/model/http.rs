/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{BEARER_PREFIX, JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::filter::{LoggerFilter, RequestFilter};
use crate::model::responses::ApiResponse;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

/// Thin JSON client bound to one base URL
///
/// Every call sends `application/json` content/accept headers and, once
/// [`set_auth_token`](Self::set_auth_token) has been called, a bearer
/// authorization header. Responses come back as [`ApiResponse`] whatever their
/// status; only transport failures are errors. Registered filters see each
/// request before it is sent and each response after its body is read.
pub struct HttpClient {
    http_client: Client,
    base_url: String,
    auth_token: RwLock<Option<String>>,
    filters: Vec<Arc<dyn RequestFilter>>,
}

impl HttpClient {
    /// Creates a client for `config` that logs traffic through [`LoggerFilter`]
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let filters: Vec<Arc<dyn RequestFilter>> = vec![Arc::new(LoggerFilter::new())];
        Self::with_filters(config, filters)
    }

    /// Creates a client for `config` running exactly `filters`, in order
    pub fn with_filters(
        config: &Config,
        filters: Vec<Arc<dyn RequestFilter>>,
    ) -> Result<Self, AppError> {
        let base_url = config.rest_api.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AppError::InvalidInput("base URL must not be empty".to_string()));
        }

        let http_client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            base_url,
            auth_token: RwLock::new(None),
            filters,
        })
    }

    /// Base URL every relative path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `path` against the base URL
    ///
    /// Absolute `http(s)` URLs are used as given.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Sends `Authorization: Bearer <token>` on every following call
    pub async fn set_auth_token(&self, token: &str) {
        let mut current = self.auth_token.write().await;
        *current = Some(token.to_string());
    }

    /// Stops sending the authorization header
    pub async fn clear_auth_token(&self) {
        let mut current = self.auth_token.write().await;
        *current = None;
    }

    /// Token currently attached to calls, if any
    pub async fn auth_token(&self) -> Option<String> {
        self.auth_token.read().await.clone()
    }

    /// Sends a GET without body
    pub async fn get(&self, path: &str) -> Result<ApiResponse, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Sends `body` as JSON with POST
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Sends `body` as JSON with PUT
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Sends one request with the stored token and buffers its response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute URL
    /// * `body` - Optional payload, serialized as JSON
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, AppError> {
        let token = self.auth_token().await;
        self.request_with_token(method, path, body, token.as_deref())
            .await
    }

    /// Sends one request authorized with `token` instead of the stored one
    ///
    /// The token is attached to this request only, so concurrent callers
    /// sharing the client never see each other's credentials. `None` sends
    /// no authorization header.
    pub async fn request_with_token<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let url = self.url_for(path);

        let mut builder = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("{BEARER_PREFIX}{token}"));
        }

        if let Some(b) = body {
            builder = builder.json(b);
        }

        let request = builder.build()?;
        debug!("{} {}", request.method(), request.url());
        for filter in &self.filters {
            filter.on_request(&request);
        }

        let started = Instant::now();
        let response = self.http_client.execute(request).await?;
        let response = ApiResponse::read(response, started).await?;
        debug!("Response status: {}", response.status());

        for filter in &self.filters {
            filter.on_response(&response);
        }
        Ok(response)
    }
}
