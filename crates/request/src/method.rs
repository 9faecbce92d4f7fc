use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP request methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    /// GET method for retrieving resources
    #[default]
    Get,
    /// POST method for submitting a body
    Post,
}

impl RequestMethod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Checks if this method can carry a request body
    #[must_use]
    pub fn can_have_body(&self) -> bool {
        match self {
            Self::Get => false,
            Self::Post => true,
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => Self::GET,
            RequestMethod::Post => Self::POST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_support() {
        assert!(RequestMethod::Post.can_have_body());
        assert!(!RequestMethod::Get.can_have_body());
        assert_eq!(RequestMethod::Post.to_string(), "POST");
        assert_eq!(reqwest::Method::from(RequestMethod::Get), reqwest::Method::GET);
    }
}
