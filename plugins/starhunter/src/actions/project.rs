use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::TextParameter;

use super::metadata;
use crate::action::{DEFAULT_LIMIT, GraphQlAction, limit_parameter, offset_parameter};
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const SEARCH_QUERY: &str = "query SearchProjects($status: String, $limit: Int, $offset: Int) { \
                            projects(status: $status, limit: $limit, offset: $offset) { \
                            id name createdAt updatedAt status position startDate endDate \
                            candidateCount company } }";

/// Projects, optionally filtered by status.
#[derive(Debug)]
pub struct SearchProjects {
    metadata: ActionMetadata,
}

impl SearchProjects {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("status", "Status")
                    .with_default("")
                    .with_description("Filter by project status (e.g., \"Suche\")"),
            )
            .with(limit_parameter())
            .with(offset_parameter());

        Self {
            metadata: metadata(
                Resource::Project,
                Operation::Search,
                "Search for projects by status",
                parameters,
            ),
        }
    }
}

impl Default for SearchProjects {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for SearchProjects {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for SearchProjects {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(SEARCH_QUERY).with_variables(
            Variables::new()
                .set_optional("status", ctx.optional_str("status"))
                .set("limit", ctx.i64_or("limit", DEFAULT_LIMIT))
                .set("offset", ctx.i64_or("offset", 0)),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        data.take_list("projects").map(ActionOutput::Many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{context, data};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use starhunter_parameter::values::ParameterValues;

    #[test]
    fn status_filter_is_optional() {
        let action = SearchProjects::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T08:00:00Z");
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "limit": 50, "offset": 0 })
        );

        let ctx = context(
            &action,
            ParameterValues::new().with("status", "Suche"),
            "2024-03-05T08:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(request.variables.unwrap().get("status"), Some(&json!("Suche")));
    }

    #[test]
    fn unwraps_projects() {
        let action = SearchProjects::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T08:00:00Z");
        let output = action
            .unwrap_response(
                data(json!({ "data": { "projects": [{ "id": 1, "candidateCount": 3 }] } })),
                &ctx,
            )
            .unwrap();
        assert_eq!(output.len(), 1);
    }
}
