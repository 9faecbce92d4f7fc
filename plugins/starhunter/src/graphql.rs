//! GraphQL request and response envelopes.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use starhunter_action::ActionError;

/// The POST body sent to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: Cow<'static, str>,
    /// Left out of the body entirely for variable-less documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphQlRequest {
    #[must_use]
    pub fn new(query: impl Into<Cow<'static, str>>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// Variable bag for a GraphQL document.
///
/// Optional inputs are omitted rather than sent as empty strings so the
/// server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always send `name`.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_owned(), value.into());
        self
    }

    /// Send `name` only when a value is present.
    #[must_use]
    pub fn set_optional<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

/// A decoded GraphQL response: optional `data`, optional `errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphQlResponse {
    pub data: Option<Map<String, Value>>,
    pub errors: Vec<GraphQlError>,
    raw: Value,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Decode a response body. An empty body decodes to an empty response.
    pub fn from_value(body: Value) -> Result<Self, ActionError> {
        if body.is_null() {
            return Ok(Self::default());
        }
        let envelope: Envelope =
            serde_json::from_value(body.clone()).map_err(|e| ActionError::Transport {
                message: format!("invalid GraphQL response: {e}"),
                status: None,
            })?;
        Ok(Self {
            data: envelope.data,
            errors: envelope.errors.unwrap_or_default(),
            raw: body,
        })
    }

    /// The body exactly as received.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Fail on a non-empty `errors` array, otherwise hand out `data`.
    pub fn into_data(self) -> Result<GraphQlData, ActionError> {
        if !self.errors.is_empty() {
            let messages = self.errors.iter().map(|e| e.message.as_str());
            return Err(ActionError::remote_api(messages, self.raw));
        }
        Ok(GraphQlData(self.data.unwrap_or_default()))
    }
}

/// The `data` object of an error-free response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphQlData(Map<String, Value>);

impl GraphQlData {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Take a list-valued root field. Absent or null yields an empty list.
    pub fn take_list(&mut self, field: &str) -> Result<Vec<Value>, ActionError> {
        match self.0.remove(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(ActionError::fatal(format!(
                "expected a list for `{field}`, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Take a single-entity root field. Absent yields `Null`.
    pub fn take_single(&mut self, field: &str) -> Value {
        self.0.remove(field).unwrap_or(Value::Null)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
