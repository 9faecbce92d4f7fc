use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde_json::Value;
use starhunter_action::{Action, ActionContext, ActionError, ActionMetadata, ActionOutput};
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::types::{NumberParameter, TextParameter, TextareaParameter};

use super::metadata;
use crate::action::GraphQlAction;
use crate::graphql::{GraphQlData, GraphQlRequest, Variables};
use crate::resource::{Operation, Resource};

const STATUSES_QUERY: &str = "query getStatuses($status: String) { projectCandidates(status: $status) { \
                              status rejectionReason changeDate \
                              person { id firstName secondName name email } } }";

const LEGACY_STATUSES_QUERY: &str = "query getStatuses($status: String) { \
                                     projectCandidates(status: $status) { \
                                     status rejectionReason changeDate person { name email } } }";

const ADD_QUERY: &str = "mutation AddCandidateToProject($projectId: Id!, $candidateId: Id!, \
                         $status: String) { addCandidateToProject(projectId: $projectId, \
                         candidateId: $candidateId, status: $status) { \
                         id status changeDate rejectionReason } }";

const UPDATE_STATUS_QUERY: &str = "mutation UpdatePresentationStatus($presentationId: Id!, \
                                   $status: String!, $comment: String) { \
                                   updatePresentationStatus(presentationId: $presentationId, \
                                   status: $status, comment: $comment) { id status updatedAt } }";

const DEFAULT_DAYS_AGO: i64 = 7;

/// Which flavor of the status-change lookup a node ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusChangeVariant {
    /// Selects the person's ID and names, tags records with `daysAgo`.
    #[default]
    Current,
    /// Selects only the person's name and email, records are untouched.
    Legacy,
}

/// Project candidates in a status whose last change happened exactly
/// `daysAgo` calendar days before today.
///
/// The server filters by status only; the date comparison runs locally on
/// the fetched list.
#[derive(Debug)]
pub struct GetByStatusChangeDate {
    metadata: ActionMetadata,
    variant: StatusChangeVariant,
}

impl GetByStatusChangeDate {
    pub fn new(variant: StatusChangeVariant) -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("status", "Status")
                    .required()
                    .with_placeholder("e.g., Ident")
                    .with_description("The candidate status to filter by"),
            )
            .with(
                NumberParameter::new("daysAgo", "Days Ago")
                    .required()
                    .with_default(7.0)
                    .with_min(0.0)
                    .integer()
                    .with_description("Number of days ago the status change should have occurred"),
            );

        Self {
            metadata: metadata(
                Resource::ProjectCandidate,
                Operation::GetByStatusChangeDate,
                "Get project candidates whose status changed X days ago",
                parameters,
            ),
            variant,
        }
    }

    pub fn variant(&self) -> StatusChangeVariant {
        self.variant
    }

    fn days_ago(ctx: &ActionContext) -> Result<(i64, NaiveDate), ActionError> {
        let days_ago = ctx.i64_or("daysAgo", DEFAULT_DAYS_AGO);
        let target = u64::try_from(days_ago)
            .ok()
            .and_then(|days| ctx.today().checked_sub_days(Days::new(days)))
            .ok_or_else(|| {
                ActionError::validation(format!("daysAgo {days_ago} does not name a valid date"))
            })?;
        Ok((days_ago, target))
    }
}

impl Default for GetByStatusChangeDate {
    fn default() -> Self {
        Self::new(StatusChangeVariant::Current)
    }
}

impl Action for GetByStatusChangeDate {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for GetByStatusChangeDate {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        // Reject an unusable offset before the round trip.
        Self::days_ago(ctx)?;
        let query = match self.variant {
            StatusChangeVariant::Current => STATUSES_QUERY,
            StatusChangeVariant::Legacy => LEGACY_STATUSES_QUERY,
        };
        Ok(GraphQlRequest::new(query)
            .with_variables(Variables::new().set("status", ctx.required_str("status")?)))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        let (days_ago, target) = Self::days_ago(ctx)?;

        let kept = data
            .take_list("projectCandidates")?
            .into_iter()
            .filter(|candidate| {
                candidate
                    .get("changeDate")
                    .and_then(Value::as_str)
                    .and_then(change_date)
                    == Some(target)
            })
            .map(|mut candidate| {
                if self.variant == StatusChangeVariant::Current
                    && let Value::Object(fields) = &mut candidate
                {
                    fields.insert("daysAgo".to_owned(), Value::from(days_ago));
                }
                candidate
            })
            .collect::<Vec<_>>();

        tracing::debug!(kept = kept.len(), %target, "filtered project candidates by change date");
        Ok(ActionOutput::Many(kept))
    }
}

/// The calendar date component of a `changeDate` value, as written.
///
/// The offset of a timestamp is never applied. Unparseable values yield `None`.
fn change_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamped.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Attach a candidate to a project.
#[derive(Debug)]
pub struct AddProjectCandidate {
    metadata: ActionMetadata,
}

impl AddProjectCandidate {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("projectId", "Project ID")
                    .required()
                    .with_description("The ID of the project"),
            )
            .with(
                TextParameter::new("candidateId", "Candidate ID")
                    .required()
                    .with_description("The ID of the candidate"),
            )
            .with(
                TextParameter::new("status", "Status")
                    .with_description("Initial status for the project candidate"),
            );

        Self {
            metadata: metadata(
                Resource::ProjectCandidate,
                Operation::Add,
                "Add a candidate to a project",
                parameters,
            ),
        }
    }
}

impl Default for AddProjectCandidate {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for AddProjectCandidate {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for AddProjectCandidate {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(ADD_QUERY).with_variables(
            Variables::new()
                .set("projectId", ctx.required_str("projectId")?)
                .set("candidateId", ctx.required_str("candidateId")?)
                .set_optional("status", ctx.optional_str("status")),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        Ok(ActionOutput::One(data.take_single("addCandidateToProject")))
    }
}

/// Move a presentation to a new status, with an optional comment.
#[derive(Debug)]
pub struct UpdatePresentationStatus {
    metadata: ActionMetadata,
}

impl UpdatePresentationStatus {
    pub fn new() -> Self {
        let parameters = ParameterCollection::new()
            .with(
                TextParameter::new("presentationId", "Presentation ID")
                    .required()
                    .with_description("The ID of the presentation"),
            )
            .with(
                TextParameter::new("status", "Status")
                    .required()
                    .with_description("The new status value"),
            )
            .with(
                TextareaParameter::new("comment", "Comment")
                    .with_rows(4)
                    .with_description("Optional comment about the status change"),
            );

        Self {
            metadata: metadata(
                Resource::ProjectCandidate,
                Operation::UpdateStatus,
                "Update the status of a presentation",
                parameters,
            ),
        }
    }
}

impl Default for UpdatePresentationStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for UpdatePresentationStatus {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }
}

impl GraphQlAction for UpdatePresentationStatus {
    fn build_request(&self, ctx: &ActionContext) -> Result<GraphQlRequest, ActionError> {
        Ok(GraphQlRequest::new(UPDATE_STATUS_QUERY).with_variables(
            Variables::new()
                .set("presentationId", ctx.required_str("presentationId")?)
                .set("status", ctx.required_str("status")?)
                .set_optional("comment", ctx.optional_str("comment")),
        ))
    }

    fn unwrap_response(
        &self,
        mut data: GraphQlData,
        _ctx: &ActionContext,
    ) -> Result<ActionOutput, ActionError> {
        Ok(ActionOutput::One(data.take_single("updatePresentationStatus")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testing::{context, data};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use starhunter_parameter::values::ParameterValues;

    fn candidates() -> Value {
        json!({ "data": { "projectCandidates": [
            { "status": "Ident", "changeDate": "2024-03-05T09:15:00Z", "person": { "id": "p1" } },
            { "status": "Ident", "changeDate": "2024-03-04T22:00:00Z", "person": { "id": "p2" } },
            { "status": "Ident", "changeDate": null, "person": { "id": "p3" } },
            { "status": "Ident", "person": { "id": "p4" } },
            { "status": "Ident", "changeDate": "2024-03-05", "person": { "id": "p5" } },
            { "status": "Ident", "changeDate": "garbage", "person": { "id": "p6" } }
        ] } })
    }

    fn ids(output: &ActionOutput) -> Vec<&str> {
        match output {
            ActionOutput::Many(records) => records
                .iter()
                .map(|r| r["person"]["id"].as_str().unwrap())
                .collect(),
            ActionOutput::One(_) => panic!("expected a list"),
        }
    }

    #[test]
    fn keeps_only_the_target_date() {
        let action = GetByStatusChangeDate::default();
        let ctx = context(
            &action,
            ParameterValues::new().with("status", "Ident").with("daysAgo", 7),
            "2024-03-12T10:00:00Z",
        );

        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "status": "Ident" })
        );
        assert!(request.query.contains("person { id firstName secondName name email }"));

        let output = action.unwrap_response(data(candidates()), &ctx).unwrap();
        assert_eq!(ids(&output), vec!["p1", "p5"]);
        match output {
            ActionOutput::Many(records) => assert!(records.iter().all(|r| r["daysAgo"] == 7)),
            ActionOutput::One(_) => unreachable!(),
        }
    }

    #[test]
    fn change_date_is_truncated_not_shifted() {
        let action = GetByStatusChangeDate::default();
        let ctx = context(
            &action,
            ParameterValues::new().with("status", "Ident").with("daysAgo", 7),
            "2024-03-12T10:00:00+02:00",
        );
        let body = json!({ "data": { "projectCandidates": [
            { "changeDate": "2024-03-05T23:30:00Z", "person": { "id": "late-on-target" } },
            { "changeDate": "2024-03-04T22:00:00Z", "person": { "id": "day-before" } },
            { "changeDate": "2024-03-05T01:00:00+05:00", "person": { "id": "early-on-target" } }
        ] } });

        let output = action.unwrap_response(data(body), &ctx).unwrap();
        assert_eq!(ids(&output), vec!["late-on-target", "early-on-target"]);
    }

    #[test]
    fn legacy_variant_leaves_records_untouched() {
        let action = GetByStatusChangeDate::new(StatusChangeVariant::Legacy);
        let ctx = context(
            &action,
            ParameterValues::new().with("status", "Ident"),
            "2024-03-12T10:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert!(request.query.contains("person { name email }"));

        let output = action.unwrap_response(data(candidates()), &ctx).unwrap();
        match output {
            ActionOutput::Many(records) => {
                assert_eq!(records.len(), 2);
                assert!(records.iter().all(|r| r.get("daysAgo").is_none()));
            }
            ActionOutput::One(_) => panic!("expected a list"),
        }
    }

    #[rstest]
    #[case("2024-03-05T09:15:00Z", Some("2024-03-05"))]
    #[case("2024-03-05T23:30:00Z", Some("2024-03-05"))]
    #[case("2024-03-05T00:30:00-05:00", Some("2024-03-05"))]
    #[case("2024-03-05T09:15:00.123", Some("2024-03-05"))]
    #[case("2024-03-05 09:15:00", Some("2024-03-05"))]
    #[case("2024-03-05", Some("2024-03-05"))]
    #[case("05.03.2024", None)]
    fn change_date_parsing(#[case] raw: &str, #[case] expected: Option<&str>) {
        let expected = expected.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
        assert_eq!(change_date(raw), expected);
    }

    #[test]
    fn negative_days_are_rejected_by_the_schema() {
        let action = GetByStatusChangeDate::default();
        let err = action
            .metadata()
            .parameters
            .resolve(&ParameterValues::new().with("status", "Ident").with("daysAgo", -1))
            .unwrap_err();
        assert_eq!(err.key(), "daysAgo");
    }

    #[test]
    fn add_omits_blank_status() {
        let action = AddProjectCandidate::new();
        let ctx = context(
            &action,
            ParameterValues::new()
                .with("projectId", "pr-1")
                .with("candidateId", "c-1")
                .with("status", ""),
            "2024-03-12T10:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "projectId": "pr-1", "candidateId": "c-1" })
        );
        let output = action
            .unwrap_response(data(json!({ "data": { "addCandidateToProject": null } })), &ctx)
            .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn update_status_sends_comment_when_given() {
        let action = UpdatePresentationStatus::new();
        let ctx = context(
            &action,
            ParameterValues::new()
                .with("presentationId", "pres-9")
                .with("status", "Absage")
                .with("comment", "No fit"),
            "2024-03-12T10:00:00Z",
        );
        let request = action.build_request(&ctx).unwrap();
        assert_eq!(
            serde_json::to_value(request.variables).unwrap(),
            json!({ "presentationId": "pres-9", "status": "Absage", "comment": "No fit" })
        );
        let output = action
            .unwrap_response(
                data(json!({ "data": { "updatePresentationStatus": { "id": "pres-9" } } })),
                &ctx,
            )
            .unwrap();
        assert_eq!(output, ActionOutput::One(json!({ "id": "pres-9" })));
    }
}
