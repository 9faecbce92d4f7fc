use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::TextParameter;

use super::metadata;
use crate::action::{
    DEFAULT_LIMIT, GraphQlAction, contact_fields, limit_parameter, offset_parameter,
};
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const SEARCH_QUERY: &str = concat!(
    "query SearchCandidates($candidateId: Id, $birthDate: BirthDate, $name: String, \
     $limit: Int, $offset: Int) { candidate(candidateId: $candidateId, birthDate: $birthDate, \
     name: $name, limit: $limit, offset: $offset) { ",
    contact_fields!(),
    " } }"
);

/// Candidates filtered by ID, partial name or birthday.
#[derive(Debug)]
pub struct SearchCandidates {
    metadata: ActionMetadata,
}

impl SearchCandidates {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("candidateId", "Candidate ID")
                    .with_default("")
                    .with_description("Search by specific candidate ID"),
            )
            .with(
                TextParameter::new("name", "Name")
                    .with_default("")
                    .with_description("Search by candidate name (partial match)"),
            )
            .with(
                TextParameter::new("birthDate", "Birth Date")
                    .with_default("")
                    .with_placeholder("MM-DD (e.g., 11-25)")
                    .with_description("Filter by birth date (format: MM-DD)"),
            )
            .with(limit_parameter())
            .with(offset_parameter());

        Self {
            metadata: metadata(
                Resource::Candidate,
                Operation::Search,
                "Search for candidates by ID, name, or birth date",
                parameters,
            ),
        }
    }
}

impl Default for SearchCandidates {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for SearchCandidates {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for SearchCandidates {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(SEARCH_QUERY).with_variables(
            Variables::new()
                .set_optional("candidateId", ctx.optional_str("candidateId"))
                .set_optional("name", ctx.optional_str("name"))
                .set_optional("birthDate", ctx.optional_str("birthDate"))
                .set("limit", ctx.i64_or("limit", DEFAULT_LIMIT))
                .set("offset", ctx.i64_or("offset", 0)),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        data.take_list("candidate").map(ActionOutput::Many)
    }
}
