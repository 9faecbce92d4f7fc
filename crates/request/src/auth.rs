use starhunter_credential::SecretString;

/// Authentication applied to an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestAuth {
    /// `Authorization: Bearer <token>`
    Bearer(SecretString),
    /// No authentication
    #[default]
    None,
}

impl RequestAuth {
    #[must_use]
    pub fn bearer(token: impl Into<SecretString>) -> Self {
        Self::Bearer(token.into())
    }

    /// The `Authorization` header value, if any.
    ///
    /// The returned string carries the secret; callers hand it straight to
    /// the transport and never log it.
    #[must_use]
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Bearer(token) => Some(token.expose_secret(|t| format!("Bearer {t}"))),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header() {
        let auth = RequestAuth::bearer("tok-1");
        assert_eq!(auth.header_value().as_deref(), Some("Bearer tok-1"));
        assert_eq!(format!("{auth:?}"), "Bearer([REDACTED])");
        assert_eq!(RequestAuth::None.header_value(), None);
    }
}
