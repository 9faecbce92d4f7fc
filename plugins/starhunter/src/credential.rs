//! Starhunter credential types and how they map to a GraphQL endpoint.

use starhunter_credential::{CredentialData, CredentialDescription, CredentialError, SecretString};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::{SecretParameter, TextParameter};
use url::Url;

/// Key of the standard credential type (`baseUrl` without the GraphQL path).
pub const STARHUNTER_API: &str = "starhunterApi";

/// Key of the credential type whose `baseUrl` is the full GraphQL URL.
pub const STARHUNTER_BIRTHDAYS_API: &str = "starhunterBirthdaysApi";

/// Path of the GraphQL endpoint below an instance's base URL.
pub const GRAPHQL_PATH: &str = "/Api/graphql";

const DOCUMENTATION_URL: &str = "https://docs.starhunter.software/api";

/// How a credential's `baseUrl` field turns into the GraphQL endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointStyle {
    /// `baseUrl` names the instance; the GraphQL path is appended.
    BaseUrl,
    /// `baseUrl` already is the GraphQL endpoint.
    FullUrl,
}

impl EndpointStyle {
    /// The credential type key this style belongs to.
    #[must_use]
    pub const fn credential_key(self) -> &'static str {
        match self {
            Self::BaseUrl => STARHUNTER_API,
            Self::FullUrl => STARHUNTER_BIRTHDAYS_API,
        }
    }

    /// The form a host renders to collect this credential.
    #[must_use]
    pub fn description(self) -> CredentialDescription {
        let base_url = match self {
            Self::BaseUrl => TextParameter::new("baseUrl", "Base URL")
                .with_default("https://your-instance.starhunter.software")
                .with_placeholder("https://XXX.starhunter.software")
                .with_description("The base URL of your Starhunter instance"),
            Self::FullUrl => TextParameter::new("baseUrl", "Base URL")
                .with_default("https://release-current.starhunter.software/Api/graphql")
                .with_description("The GraphQL endpoint URL of your Starhunter instance"),
        };

        CredentialDescription::new(self.credential_key(), "Starhunter API")
            .with_documentation_url(DOCUMENTATION_URL)
            .with_properties(
                ParameterCollection::new()
                    .with(base_url.required())
                    .with(
                        SecretParameter::new("accessToken", "Access Token")
                            .required()
                            .with_description("Your Starhunter API access token"),
                    ),
            )
    }

    /// Derive the GraphQL endpoint from a `baseUrl` value.
    pub fn endpoint(self, base_url: &str) -> Result<Url, CredentialError> {
        let base_url = base_url.trim();
        let raw = match self {
            Self::BaseUrl => format!("{}{GRAPHQL_PATH}", base_url.trim_end_matches('/')),
            Self::FullUrl => base_url.to_owned(),
        };
        let url = Url::parse(&raw).map_err(|e| CredentialError::invalid_field("baseUrl", e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CredentialError::invalid_field(
                "baseUrl",
                format!("unsupported scheme `{other}`"),
            )),
        }
    }
}

/// A validated Starhunter credential: where to send requests and the token
/// to send with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarhunterCredential {
    pub endpoint: Url,
    pub access_token: SecretString,
}

impl StarhunterCredential {
    #[must_use]
    pub fn new(endpoint: Url, access_token: impl Into<SecretString>) -> Self {
        Self {
            endpoint,
            access_token: access_token.into(),
        }
    }

    /// Interpret a stored record according to `style`.
    pub fn from_data(style: EndpointStyle, data: &CredentialData) -> Result<Self, CredentialError> {
        let endpoint = style.endpoint(data.require_field("baseUrl")?)?;
        let access_token = data.require_secret("accessToken")?.clone();
        Ok(Self {
            endpoint,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use starhunter_parameter::values::ParameterValues;

    #[rstest]
    #[case("https://acme.starhunter.software", "https://acme.starhunter.software/Api/graphql")]
    #[case("https://acme.starhunter.software/", "https://acme.starhunter.software/Api/graphql")]
    #[case(" https://acme.starhunter.software ", "https://acme.starhunter.software/Api/graphql")]
    fn base_url_style_appends_path(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(EndpointStyle::BaseUrl.endpoint(base).unwrap().as_str(), expected);
    }

    #[test]
    fn full_url_style_is_used_verbatim() {
        let url = EndpointStyle::FullUrl
            .endpoint("https://release-current.starhunter.software/Api/graphql")
            .unwrap();
        assert_eq!(url.path(), "/Api/graphql");
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert!(matches!(
            EndpointStyle::FullUrl.endpoint("not a url"),
            Err(CredentialError::InvalidField { .. })
        ));
        assert!(EndpointStyle::FullUrl.endpoint("ftp://x.test/graphql").is_err());
    }

    #[test]
    fn record_requires_both_fields() {
        let data = CredentialData::new().with_field("baseUrl", "https://acme.starhunter.software");
        assert_eq!(
            StarhunterCredential::from_data(EndpointStyle::BaseUrl, &data).unwrap_err(),
            CredentialError::missing_field("accessToken")
        );

        let data = data.with_secret("accessToken", "tok");
        let credential = StarhunterCredential::from_data(EndpointStyle::BaseUrl, &data).unwrap();
        assert_eq!(
            credential.endpoint.as_str(),
            "https://acme.starhunter.software/Api/graphql"
        );
        assert_eq!(credential.access_token, SecretString::new("tok"));
    }

    #[test]
    fn descriptions_parse_form_input() {
        let description = EndpointStyle::BaseUrl.description();
        assert_eq!(description.key, STARHUNTER_API);

        let data = description
            .parse(&ParameterValues::new().with("accessToken", "tok"))
            .unwrap();
        assert_eq!(data.field("baseUrl"), Some("https://your-instance.starhunter.software"));

        let birthdays = EndpointStyle::FullUrl.description();
        assert_eq!(birthdays.key, STARHUNTER_BIRTHDAYS_API);
        let data = birthdays
            .parse(&ParameterValues::new().with("accessToken", "tok"))
            .unwrap();
        let credential = StarhunterCredential::from_data(EndpointStyle::FullUrl, &data).unwrap();
        assert_eq!(
            credential.endpoint.as_str(),
            "https://release-current.starhunter.software/Api/graphql"
        );
    }
}
