//! Hubstaff REST call executor
//!
//! Information Hiding:
//! - HTTP client, connection pool and auth header handling hidden
//! - Response classification (status, body decoding) internalized
//! - Callers only see `CallResult`
//!
//! One call is one GET. There are no retries and no shared mutable state,
//! so a client can be cloned freely and used from many tasks at once.

use super::error::{http_error_message, CallError};
use super::request::{self, Args};
use crate::config::{Credentials, Settings};
use crate::endpoints::{catalog, EndpointDescriptor};
use anyhow::Result;
use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;
use std::future::Future;
use tokio::time::{timeout, Duration};

/// Outcome of one endpoint call
pub type CallResult = std::result::Result<Value, CallError>;

pub const DEFAULT_BASE_URL: &str = "https://api.hubstaff.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct HubstaffClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl HubstaffClient {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL '{}': {}", base_url, e))?;

        if parsed.cannot_be_a_base() {
            return Err(anyhow::anyhow!("Base URL '{}' cannot carry a path", base_url));
        }

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn from_settings(settings: &Settings, credentials: Credentials) -> Result<Self> {
        let mut client = Self::new(settings.api.base_url.clone(), credentials)?
            .with_timeout(Duration::from_secs(settings.api.timeout_secs));

        if let Some(agent) = settings.api.user_agent.as_deref().filter(|a| !a.is_empty()) {
            client.client = Client::builder().user_agent(agent.to_string()).build()?;
        }

        Ok(client)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.token().is_some()
    }

    pub fn build_url(&self, descriptor: &EndpointDescriptor, args: &Args) -> std::result::Result<Url, CallError> {
        request::build_url(&self.base_url, descriptor, args)
    }

    /// Execute a catalog endpoint by tool name
    pub async fn call(&self, tool: &str, args: &Args) -> CallResult {
        match catalog::find(tool) {
            Some(descriptor) => self.execute(descriptor, args).await,
            None => Err(CallError::unknown_tool(tool)),
        }
    }

    /// Execute with the client's default deadline
    pub async fn execute(&self, descriptor: &EndpointDescriptor, args: &Args) -> CallResult {
        self.execute_with_timeout(descriptor, args, self.timeout).await
    }

    pub async fn execute_with_timeout(
        &self,
        descriptor: &EndpointDescriptor,
        args: &Args,
        deadline: Duration,
    ) -> CallResult {
        let url = self.build_url(descriptor, args)?;

        match timeout(deadline, self.send(descriptor, url)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("[{}] Request timed out after {:?}", descriptor.name, deadline);
                Err(CallError::Timeout)
            }
        }
    }

    /// Execute until `cancel` resolves; the in-flight request is dropped
    /// when it does
    pub async fn execute_until<F>(&self, descriptor: &EndpointDescriptor, args: &Args, cancel: F) -> CallResult
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.execute(descriptor, args) => result,
            _ = cancel => {
                tracing::warn!("[{}] Request cancelled by caller", descriptor.name);
                Err(CallError::Cancelled)
            }
        }
    }

    async fn send(&self, descriptor: &EndpointDescriptor, url: Url) -> CallResult {
        tracing::info!("[{}] GET {}", descriptor.name, url);

        let mut builder = self
            .client
            .request(descriptor.method(), url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.credentials.token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("[{}] HTTP request failed: {}", descriptor.name, e);
            CallError::from_reqwest(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!("[{}] Failed to read response body: {}", descriptor.name, e);
            CallError::from_reqwest(e)
        })?;

        classify(descriptor.name, status, &bytes)
    }
}

impl std::fmt::Debug for HubstaffClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubstaffClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn classify(tool: &str, status: StatusCode, bytes: &[u8]) -> CallResult {
    if !status.is_success() {
        let body: Option<Value> = serde_json::from_slice(bytes).ok();
        let raw = String::from_utf8_lossy(bytes);
        let message = http_error_message(status, body.as_ref(), &raw);
        tracing::warn!("[{}] API returned error status {}: {}", tool, status, message);

        return Err(CallError::Http {
            status: status.as_u16(),
            message,
            body,
        });
    }

    if status == StatusCode::NO_CONTENT && bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!("[{}] Failed to decode response body: {}", tool, e);
        CallError::Decode(e.to_string())
    })
}
