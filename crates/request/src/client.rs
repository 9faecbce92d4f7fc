use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RequestError;
use crate::request::HttpRequest;
use crate::response::HttpResponse;

/// Per-call timeout applied when a request does not set its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest response body excerpt carried in a status error.
const ERROR_BODY_LIMIT: usize = 512;

/// Port trait for sending requests.
///
/// Implementations must treat any non-2xx status as
/// [`RequestError::Status`] so callers only ever see successful bodies.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Settings for [`ReqwestClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("starhunter/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for sending requests, backed by `reqwest` with rustls.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestClient {
    /// Creates a new client with the given settings
    pub fn new(config: ClientConfig) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RequestError::Build(e.to_string()))?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl fmt::Debug for ReqwestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestClient")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let started = Instant::now();
        let timeout = request.timeout.unwrap_or(self.config.timeout);

        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .timeout(timeout);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(value) = request.auth.header_value() {
            builder = builder.header(reqwest::header::AUTHORIZATION, value);
        }
        if request.method.can_have_body()
            && let Some(json) = &request.json
        {
            builder = builder.json(json);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RequestError::Timeout(timeout)
            } else {
                RequestError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_owned(), v.to_owned()))
            })
            .collect();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let duration_ms = started.elapsed().as_millis() as u64;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            duration_ms,
            "request completed"
        );

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                body: excerpt(&text),
            });
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| RequestError::Decode(e.to_string()))?
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
            duration_ms,
        })
    }
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_owned(),
    }
}
