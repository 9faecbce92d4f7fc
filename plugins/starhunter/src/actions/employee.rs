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
    "query SearchEmployees($employeeId: Id, $name: String, $limit: Int, $offset: Int) { \
     employee(employeeId: $employeeId, name: $name, limit: $limit, offset: $offset) { ",
    contact_fields!(),
    " } }"
);

const CURRENT_QUERY: &str = concat!("query GetCurrentUser { user { ", contact_fields!(), " } }");

/// Employees filtered by ID or partial name.
#[derive(Debug)]
pub struct SearchEmployees {
    metadata: ActionMetadata,
}

impl SearchEmployees {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("employeeId", "Employee ID")
                    .with_default("")
                    .with_description("Search by specific employee ID"),
            )
            .with(
                TextParameter::new("name", "Name")
                    .with_default("")
                    .with_description("Search by employee name (partial match)"),
            )
            .with(limit_parameter())
            .with(offset_parameter());

        Self {
            metadata: metadata(
                Resource::Employee,
                Operation::Search,
                "Search for employees by ID or name",
                parameters,
            ),
        }
    }
}

impl Default for SearchEmployees {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for SearchEmployees {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for SearchEmployees {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(SEARCH_QUERY).with_variables(
            Variables::new()
                .set_optional("employeeId", ctx.optional_str("employeeId"))
                .set_optional("name", ctx.optional_str("name"))
                .set("limit", ctx.i64_or("limit", DEFAULT_LIMIT))
                .set("offset", ctx.i64_or("offset", 0)),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        data.take_list("employee").map(ActionOutput::Many)
    }
}

/// The employee record behind the access token.
#[derive(Debug)]
pub struct GetCurrentEmployee {
    metadata: ActionMetadata,
}

impl GetCurrentEmployee {
    pub fn new() -> Self {
        Self {
            metadata: metadata(
                Resource::Employee,
                Operation::GetCurrent,
                "Get the employee record for the authenticated user",
                ParameterCollection::new(),
            ),
        }
    }
}

impl Default for GetCurrentEmployee {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for GetCurrentEmployee {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for GetCurrentEmployee {
    fn build_request(&self, _ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(CURRENT_QUERY))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        Ok(ActionOutput::One(data.take_single("user")))
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
    fn search_variables() {
        let action = SearchEmployees::new();
        let ctx = context(
            &action,
            ParameterValues::new().with("employeeId", "e-7").with("limit", 5),
            "2024-03-05T08:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "employeeId": "e-7", "limit": 5, "offset": 0 })
        );
    }

    #[test]
    fn current_user_sends_no_variables() {
        let action = GetCurrentEmployee::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T08:00:00Z");
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(request.variables, None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": CURRENT_QUERY })
        );
    }

    #[test]
    fn current_user_missing_is_no_record() {
        let action = GetCurrentEmployee::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T08:00:00Z");
        let output = action.unwrap_response(data(json!({ "data": {} })), &ctx).unwrap();
        assert!(output.is_empty());

        let output = action
            .unwrap_response(data(json!({ "data": { "user": { "id": "u1" } } })), &ctx)
            .unwrap();
        assert_eq!(output, ActionOutput::One(json!({ "id": "u1" })));
    }
}
