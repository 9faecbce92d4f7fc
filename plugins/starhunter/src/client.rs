use std::fmt;
use std::sync::Arc;

use starhunter_action::ActionError;
use starhunter_request::{HttpClient, HttpRequest, RequestAuth};
use url::Url;

use crate::credential::StarhunterCredential;
use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// Document sent by the credential liveness probe.
pub const PROBE_QUERY: &str = "{ __typename }";

/// Sends GraphQL documents to one Starhunter endpoint with bearer auth.
#[derive(Clone)]
pub struct StarhunterClient {
    endpoint: Url,
    auth: RequestAuth,
    http: Arc<dyn HttpClient>,
}

impl StarhunterClient {
    pub fn new(http: Arc<dyn HttpClient>, credential: &StarhunterCredential) -> Self {
        Self {
            endpoint: credential.endpoint.clone(),
            auth: RequestAuth::Bearer(credential.access_token.clone()),
            http,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST one document and decode the envelope. GraphQL-level errors are
    /// left in the response for the caller to unwrap.
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, ActionError> {
        let http_request = HttpRequest::post(self.endpoint.as_str())?
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request)?
            .auth(self.auth.clone());

        let response = self.http.send(http_request).await?;
        tracing::debug!(
            endpoint = %self.endpoint,
            status = response.status,
            duration_ms = response.duration_ms,
            "graphql response received"
        );
        GraphQlResponse::from_value(response.body)
    }

    /// Check that the endpoint answers an authenticated request without
    /// GraphQL errors.
    pub async fn probe(&self) -> Result<(), ActionError> {
        self.execute(&GraphQlRequest::new(PROBE_QUERY))
            .await?
            .into_data()
            .map(drop)
    }
}

impl fmt::Debug for StarhunterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarhunterClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
