use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RequestError;

/// A decoded JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lower-cased names)
    pub headers: BTreeMap<String, String>,
    /// Response body; `Null` when the body was empty
    pub body: Value,
    /// Request duration in milliseconds
    pub duration_ms: u64,
}

impl HttpResponse {
    /// A successful response with the given body.
    #[must_use]
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body,
            duration_ms: 0,
        }
    }

    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        serde_json::from_value(self.body.clone()).map_err(|e| RequestError::Decode(e.to_string()))
    }

    /// Consume the response, deserializing the body.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        serde_json::from_value(self.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Envelope {
        data: Option<Value>,
    }

    #[test]
    fn typed_body() {
        let response = HttpResponse::ok(json!({ "data": { "user": null } }));
        let envelope: Envelope = response.json().unwrap();
        assert_eq!(envelope.data, Some(json!({ "user": null })));
    }

    #[test]
    fn decode_error() {
        let response = HttpResponse::ok(json!([1, 2]));
        let err = response.into_json::<Envelope>().unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }
}
