use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::{DateTimeParameter, TextParameter, TextareaParameter};

use super::metadata;
use crate::action::GraphQlAction;
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const CREATE_QUERY: &str = "mutation CreateTask($title: String!, $description: String, \
                            $deadline: Date, $assignee: Id, $target: Id) { \
                            createTask(title: $title, description: $description, \
                            deadline: $deadline, assignee: $assignee, target: $target) { \
                            id title description deadline assignee } }";

#[derive(Debug)]
pub struct CreateTask {
    metadata: ActionMetadata,
}

impl CreateTask {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("title", "Title")
                    .required()
                    .with_description("The title of the task"),
            )
            .with(
                TextareaParameter::new("taskDescription", "Description")
                    .with_rows(4)
                    .with_description("The description of the task"),
            )
            .with(
                DateTimeParameter::new("deadline", "Deadline")
                    .with_description("The deadline for the task"),
            )
            .with(
                TextParameter::new("assignee", "Assignee ID")
                    .with_description("The ID of the person to assign the task to"),
            )
            .with(
                TextParameter::new("target", "Target ID")
                    .with_description("The ID of the target entity for the task"),
            );

        Self {
            metadata: metadata(
                Resource::Task,
                Operation::Create,
                "Create a new task in Starhunter",
                parameters,
            ),
        }
    }
}

impl Default for CreateTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for CreateTask {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for CreateTask {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(CREATE_QUERY).with_variables(
            Variables::new()
                .set("title", ctx.required_str("title")?)
                .set_optional("description", ctx.optional_str("taskDescription"))
                .set_optional("deadline", ctx.optional_str("deadline"))
                .set_optional("assignee", ctx.optional_str("assignee"))
                .set_optional("target", ctx.optional_str("target")),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        Ok(ActionOutput::One(data.take_single("createTask")))
    }
}
