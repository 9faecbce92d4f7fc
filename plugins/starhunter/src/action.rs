use starhunter_action::{Action, ActionContext, ActionError, ActionOutput};
use starhunter_parameter::types::NumberParameter;

use crate::graphql::{GraphQlData, GraphQlRequest};

/// An action that is one GraphQL round trip.
///
/// The node sends the request built here and hands the error-free `data`
/// of the response back to [`unwrap_response`](Self::unwrap_response).
/// Neither step touches the network or the system clock.
pub trait GraphQlAction: Action {
    /// Build the document and variables for one item.
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError>;

    /// Extract the records for one item from the response data.
    fn unwrap_response(
        &self,
        data: GraphQlData,
        ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError>;
}

/// Selection set shared by person-shaped entities.
macro_rules! person_fields {
    () => {
        "id name firstName secondName middleName academicTitle salutation email \
         birthDate phone functions address createdAt updatedAt"
    };
}

/// Person fields plus the contact history, for candidates and employees.
macro_rules! contact_fields {
    () => {
        concat!(
            $crate::action::person_fields!(),
            " contactHistory { title type date }"
        )
    };
}

pub(crate) use {contact_fields, person_fields};

pub(crate) const DEFAULT_LIMIT: i64 = 50;

/// The `limit` field every list action exposes.
pub(crate) fn limit_parameter() -> NumberParameter {
    NumberParameter::new("limit", "Limit")
        .with_default(50.0)
        .with_min(1.0)
        .with_max(1000.0)
        .integer()
        .with_description("Max number of results to return")
}

/// The `offset` field of paginated searches.
pub(crate) fn offset_parameter() -> NumberParameter {
    NumberParameter::new("offset", "Offset")
        .with_default(0.0)
        .with_min(0.0)
        .integer()
        .with_description("Number of results to skip for pagination")
}
