use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::RequestAuth;
use crate::error::RequestError;
use crate::method::RequestMethod;

/// A fully described outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: RequestMethod,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub json: Option<Value>,
    pub auth: RequestAuth,
    /// Overrides the client's default timeout for this call.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Start a request, validating the URL up front.
    pub fn new(method: RequestMethod, url: &str) -> Result<Self, RequestError> {
        let url = Url::parse(url).map_err(|e| RequestError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            method,
            url,
            headers: BTreeMap::new(),
            json: None,
            auth: RequestAuth::None,
            timeout: None,
        })
    }

    /// Creates a POST request
    pub fn post(url: &str) -> Result<Self, RequestError> {
        Self::new(RequestMethod::Post, url)
    }

    /// Creates a GET request
    pub fn get(url: &str) -> Result<Self, RequestError> {
        Self::new(RequestMethod::Get, url)
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, RequestError> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets the authentication method
    #[must_use]
    pub fn auth(mut self, auth: RequestAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
