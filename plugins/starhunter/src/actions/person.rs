use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::display::DisplayRuleSet;
use starhunter_parameter::types::{CheckboxParameter, TextParameter};

use super::metadata;
use crate::action::{
    DEFAULT_LIMIT, GraphQlAction, limit_parameter, offset_parameter, person_fields,
};
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const BIRTHDAYS_QUERY: &str = concat!(
    "query GetBirthdays($date: BirthDate, $limit: Int) { persons(birthDate: $date, limit: $limit) { ",
    person_fields!(),
    " } }"
);

const GET_BY_ID_QUERY: &str = concat!(
    "query GetPerson($id: Id!) { person(id: $id) { ",
    person_fields!(),
    " } }"
);

const SEARCH_QUERY: &str = concat!(
    "query SearchPersons($name: String, $limit: Int, $offset: Int) { \
     persons(name: $name, limit: $limit, offset: $offset) { ",
    person_fields!(),
    " } }"
);

/// Persons whose birthday (month and day) falls on a date, today by default.
#[derive(Debug)]
pub struct GetBirthdays {
    metadata: ActionMetadata,
}

impl GetBirthdays {
    pub fn new() -> Self {
        Self {
            metadata: metadata(
                Resource::Person,
                Operation::GetBirthdays,
                "Get all persons with birthdays on a specific date",
                Self::parameters(),
            ),
        }
    }

    /// The birthday form; also the whole form of the standalone birthdays node.
    pub fn parameters() -> ParameterCollection {
        ParameterCollection::new()
            .with(
                CheckboxParameter::new("useToday", "Use Today's Date")
                    .with_default(true)
                    .with_description("Whether to use today's date for the birthday search"),
            )
            .with(
                TextParameter::new("date", "Date")
                    .with_default("")
                    .with_placeholder("MM-DD (e.g., 11-25)")
                    .with_description("The date to search for birthdays (format: MM-DD)")
                    .show_when(DisplayRuleSet::equals("useToday", false)),
            )
            .with(limit_parameter())
    }
}

impl Default for GetBirthdays {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for GetBirthdays {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for GetBirthdays {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        let date = if ctx.bool_or("useToday", true) {
            Some(ctx.today().format("%m-%d").to_string())
        } else {
            ctx.optional_str("date").map(str::to_owned)
        };

        Ok(GraphQlRequest::new(BIRTHDAYS_QUERY).with_variables(
            Variables::new()
                .set_optional("date", date)
                .set("limit", ctx.i64_or("limit", DEFAULT_LIMIT)),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        data.take_list("persons").map(ActionOutput::Many)
    }
}

/// One person by ID.
#[derive(Debug)]
pub struct GetPersonById {
    metadata: ActionMetadata,
}

impl GetPersonById {
    pub fn new() -> Self {
        Self {
            metadata: metadata(
                Resource::Person,
                Operation::GetById,
                "Retrieve a single person by their ID",
                ParameterCollection::new().with(
                    TextParameter::new("personId", "Person ID")
                        .required()
                        .with_description("The ID of the person to retrieve"),
                ),
            ),
        }
    }
}

impl Default for GetPersonById {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for GetPersonById {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for GetPersonById {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(GET_BY_ID_QUERY)
            .with_variables(Variables::new().set("id", ctx.required_str("personId")?)))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        Ok(ActionOutput::One(data.take_single("person")))
    }
}

/// Persons matching a partial name.
#[derive(Debug)]
pub struct SearchPersons {
    metadata: ActionMetadata,
}

impl SearchPersons {
    pub fn new() -> Self {
        Self {
            metadata: metadata(
                Resource::Person,
                Operation::Search,
                "Search for persons by name",
                ParameterCollection::new()
                    .with(
                        TextParameter::new("name", "Name")
                            .with_default("")
                            .with_description("Search by person name (partial match)"),
                    )
                    .with(limit_parameter())
                    .with(offset_parameter()),
            ),
        }
    }
}

impl Default for SearchPersons {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for SearchPersons {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for SearchPersons {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(SEARCH_QUERY).with_variables(
            Variables::new()
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
        data.take_list("persons").map(ActionOutput::Many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{context, data};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use starhunter_parameter::values::ParameterValues;

    fn variables(request: &GraphQlRequest) -> Value {
        serde_json::to_value(request.variables.as_ref()).unwrap()
    }

    #[test]
    fn birthdays_default_to_today() {
        let action = GetBirthdays::new();
        let ctx = context(
            &action,
            ParameterValues::new().with("date", "12-24"),
            "2024-03-05T08:00:00+01:00",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(variables(&request), json!({ "date": "03-05", "limit": 50 }));
        assert!(request.query.starts_with("query GetBirthdays($date: BirthDate, $limit: Int)"));
    }

    #[test]
    fn birthdays_today_follows_the_clock_offset() {
        let action = GetBirthdays::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T23:30:00-05:00");
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(variables(&request)["date"], "03-05");
    }

    #[test]
    fn birthdays_explicit_date() {
        let action = GetBirthdays::new();
        let ctx = context(
            &action,
            ParameterValues::new()
                .with("useToday", false)
                .with("date", "11-25")
                .with("limit", 10),
            "2024-03-05T08:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(variables(&request), json!({ "date": "11-25", "limit": 10 }));
    }

    #[test]
    fn birthdays_limit_out_of_range_fails_resolution() {
        let action = GetBirthdays::new();
        let err = action
            .metadata()
            .parameters
            .resolve(&ParameterValues::new().with("limit", 5000))
            .unwrap_err();
        assert_eq!(err.key(), "limit");
    }

    #[test]
    fn get_by_id_single_result() {
        let action = GetPersonById::new();
        let ctx = context(
            &action,
            ParameterValues::new().with("personId", "p-1"),
            "2024-03-05T08:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(variables(&request), json!({ "id": "p-1" }));

        let output = action
            .unwrap_response(data(json!({ "data": { "person": { "id": "p-1" } } })), &ctx)
            .unwrap();
        assert_eq!(output, ActionOutput::One(json!({ "id": "p-1" })));

        let output = action
            .unwrap_response(data(json!({ "data": { "person": null } })), &ctx)
            .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn search_omits_blank_name() {
        let action = SearchPersons::new();
        let ctx = context(
            &action,
            ParameterValues::new().with("name", "  "),
            "2024-03-05T08:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(variables(&request), json!({ "limit": 50, "offset": 0 }));
        assert!(request.query.contains("persons(name: $name, limit: $limit, offset: $offset)"));
    }

    #[test]
    fn search_lists_persons() {
        let action = SearchPersons::new();
        let ctx = context(&action, ParameterValues::new(), "2024-03-05T08:00:00Z");
        let output = action
            .unwrap_response(
                data(json!({ "data": { "persons": [{ "id": "a" }, { "id": "b" }] } })),
                &ctx,
            )
            .unwrap();
        assert_eq!(output.len(), 2);

        let output = action.unwrap_response(data(json!({ "data": {} })), &ctx).unwrap();
        assert_eq!(output, ActionOutput::Many(Vec::new()));
    }
}
