use serde_json::{Value, json};
use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::{TextParameter, TextareaParameter};

use super::metadata;
use crate::action::GraphQlAction;
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const LOG_QUERY: &str = "mutation LogEmail($from: String!, $to: String!, $subject: String!, \
                         $body: String!) { logEmail(from: $from, to: $to, subject: $subject, body: $body) }";

/// Records an email as an activity. The output echoes the envelope but
/// never the body.
#[derive(Debug)]
pub struct LogEmail {
    metadata: ActionMetadata,
}

impl LogEmail {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("from", "From")
                    .required()
                    .with_placeholder("sender@example.com")
                    .with_description("Email address of the sender"),
            )
            .with(
                TextParameter::new("to", "To")
                    .required()
                    .with_placeholder("recipient@example.com")
                    .with_description("Email address of the recipient"),
            )
            .with(
                TextParameter::new("subject", "Subject")
                    .required()
                    .with_description("Subject line of the email"),
            )
            .with(
                TextareaParameter::new("body", "Body")
                    .with_rows(6)
                    .required()
                    .with_description("Body content of the email"),
            );

        Self {
            metadata: metadata(
                Resource::Email,
                Operation::Log,
                "Log an email activity in Starhunter",
                parameters,
            ),
        }
    }
}

impl Default for LogEmail {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for LogEmail {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for LogEmail {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(LOG_QUERY).with_variables(
            Variables::new()
                .set("from", ctx.required_str("from")?)
                .set("to", ctx.required_str("to")?)
                .set("subject", ctx.required_str("subject")?)
                .set("body", ctx.required_str("body")?),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        let success = match data.take_single("logEmail") {
            Value::Null => Value::Bool(false),
            other => other,
        };
        Ok(ActionOutput::One(json!({
            "success": success,
            "from": ctx.required_str("from")?,
            "to": ctx.required_str("to")?,
            "subject": ctx.required_str("subject")?,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{context, data};
    use pretty_assertions::assert_eq;
    use starhunter_parameter::error::ParameterError;
    use starhunter_parameter::values::ParameterValues;

    fn supplied() -> ParameterValues {
        ParameterValues::new()
            .with("from", "a@x.com")
            .with("to", "b@x.com")
            .with("subject", "Hi")
            .with("body", "Hello")
    }

    #[test]
    fn output_echoes_envelope_without_body() {
        let action = LogEmail::new();
        let ctx = context(&action, supplied(), "2024-03-05T08:00:00Z");

        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "from": "a@x.com", "to": "b@x.com", "subject": "Hi", "body": "Hello" })
        );

        let output = action
            .unwrap_response(data(json!({ "data": { "logEmail": true } })), &ctx)
            .unwrap();
        assert_eq!(
            output,
            ActionOutput::One(json!({
                "success": true,
                "from": "a@x.com",
                "to": "b@x.com",
                "subject": "Hi",
            }))
        );
    }

    #[test]
    fn missing_result_reports_failure() {
        let action = LogEmail::new();
        let ctx = context(&action, supplied(), "2024-03-05T08:00:00Z");
        let output = action.unwrap_response(data(json!({ "data": null })), &ctx).unwrap();
        match output {
            ActionOutput::One(record) => assert_eq!(record["success"], false),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn every_field_is_required() {
        let action = LogEmail::new();
        let err = action
            .metadata()
            .parameters
            .resolve(&supplied().with("body", ""))
            .unwrap_err();
        assert_eq!(err, ParameterError::MissingValue { key: "body".into() });
    }
}
