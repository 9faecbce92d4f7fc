use std::sync::Arc;

use serde::{Deserialize, Serialize};
use starhunter_action::{
    ActionError, ActionRegistry, ExecutionContext, ItemOutput, UnknownActionPolicy,
};
use starhunter_credential::CredentialDescription;
use starhunter_parameter::collection::ParameterCollection;
use starhunter_parameter::display::DisplayRuleSet;
use starhunter_parameter::option::SelectOption;
use starhunter_parameter::types::SelectParameter;
use starhunter_parameter::values::ParameterValues;
use tracing::Instrument;

use crate::action::GraphQlAction;
use crate::actions::{
    AddProjectCandidate, CreateTask, GetBirthdays, GetByStatusChangeDate, GetCurrentEmployee,
    GetPersonById, LogEmail, SearchCandidates, SearchEmployees, SearchPersons, SearchProjects,
    StatusChangeVariant, UpdatePresentationStatus,
};
use crate::client::StarhunterClient;
use crate::credential::{EndpointStyle, StarhunterCredential};
use crate::resource::{ActionKey, Operation, Resource};

/// Which product variant of the Starhunter node to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeProfile {
    /// Candidates, email, employees, persons, status-change lookups, tasks.
    #[default]
    Standard,
    /// Standard plus project search and project-candidate mutations.
    Extended,
    /// Birthdays, the legacy status-change lookup and task creation.
    Lite,
    /// The standalone birthdays node with a full-URL credential.
    Birthdays,
}

impl NodeProfile {
    pub const ALL: &'static [Self] = &[Self::Standard, Self::Extended, Self::Lite, Self::Birthdays];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
            Self::Lite => "lite",
            Self::Birthdays => "birthdays",
        }
    }

    fn catalog(self) -> Vec<Arc<dyn GraphQlAction>> {
        let standard = || -> Vec<Arc<dyn GraphQlAction>> {
            vec![
                Arc::new(SearchCandidates::new()),
                Arc::new(LogEmail::new()),
                Arc::new(GetCurrentEmployee::new()),
                Arc::new(SearchEmployees::new()),
                Arc::new(GetBirthdays::new()),
                Arc::new(GetPersonById::new()),
                Arc::new(SearchPersons::new()),
                Arc::new(GetByStatusChangeDate::new(StatusChangeVariant::Current)),
                Arc::new(CreateTask::new()),
            ]
        };

        match self {
            Self::Standard => standard(),
            Self::Extended => {
                let mut actions = standard();
                actions.push(Arc::new(AddProjectCandidate::new()));
                actions.push(Arc::new(UpdatePresentationStatus::new()));
                actions.push(Arc::new(SearchProjects::new()));
                actions
            }
            Self::Lite => vec![
                Arc::new(GetBirthdays::new()),
                Arc::new(GetByStatusChangeDate::new(StatusChangeVariant::Legacy)),
                Arc::new(CreateTask::new()),
            ],
            Self::Birthdays => vec![Arc::new(GetBirthdays::new())],
        }
    }
}

impl std::str::FromStr for NodeProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown node profile `{s}`"))
    }
}

/// A credential slot a node declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeCredential {
    pub name: String,
    pub required: bool,
}

/// Everything a host needs to render the node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub version: u32,
    /// Host expression rendered under the node title.
    pub subtitle: String,
    pub credentials: Vec<NodeCredential>,
    pub properties: ParameterCollection,
}

/// How an item picks its action.
#[derive(Debug, Clone, Copy)]
enum Selection {
    /// From the `resource` and `operation` parameters.
    Selectors,
    /// Always the same action.
    Fixed(ActionKey),
}

/// A Starhunter node: its description, its actions, and the per-item
/// dispatch loop.
#[derive(Debug)]
pub struct StarhunterNode {
    profile: NodeProfile,
    description: NodeDescription,
    registry: ActionRegistry<ActionKey, dyn GraphQlAction>,
    order: Vec<ActionKey>,
    selection: Selection,
    endpoint: EndpointStyle,
}

impl StarhunterNode {
    pub fn new(profile: NodeProfile) -> Self {
        let mut registry = ActionRegistry::new();
        let mut order = Vec::new();
        for action in profile.catalog() {
            let key = action_key(action.as_ref());
            if let Some(key) = key {
                order.push(key);
                registry.register(key, action);
            }
        }

        let (selection, endpoint, description) = match profile {
            NodeProfile::Birthdays => (
                Selection::Fixed(ActionKey::new(Resource::Person, Operation::GetBirthdays)),
                EndpointStyle::FullUrl,
                NodeDescription {
                    name: "starhunterBirthdays".into(),
                    display_name: "Starhunter Birthdays".into(),
                    description: "Get persons with birthdays from Starhunter".into(),
                    version: 1,
                    subtitle: r#"={{$parameter["useToday"] ? "Today" : $parameter["date"]}}"#.into(),
                    credentials: vec![NodeCredential {
                        name: EndpointStyle::FullUrl.credential_key().into(),
                        required: true,
                    }],
                    properties: GetBirthdays::parameters(),
                },
            ),
            _ => (
                Selection::Selectors,
                EndpointStyle::BaseUrl,
                NodeDescription {
                    name: "starhunter".into(),
                    display_name: "Starhunter".into(),
                    description: "Interact with Starhunter".into(),
                    version: 1,
                    subtitle: r#"={{$parameter["operation"] + ": " + $parameter["resource"]}}"#
                        .into(),
                    credentials: vec![NodeCredential {
                        name: EndpointStyle::BaseUrl.credential_key().into(),
                        required: true,
                    }],
                    properties: selector_properties(&registry, &order),
                },
            ),
        };

        Self {
            profile,
            description,
            registry,
            order,
            selection,
            endpoint,
        }
    }

    pub fn standard() -> Self {
        Self::new(NodeProfile::Standard)
    }

    pub fn extended() -> Self {
        Self::new(NodeProfile::Extended)
    }

    pub fn lite() -> Self {
        Self::new(NodeProfile::Lite)
    }

    pub fn birthdays() -> Self {
        Self::new(NodeProfile::Birthdays)
    }

    pub fn profile(&self) -> NodeProfile {
        self.profile
    }

    pub fn description(&self) -> &NodeDescription {
        &self.description
    }

    /// The form for the credential type this node authenticates with.
    pub fn credential_description(&self) -> CredentialDescription {
        self.endpoint.description()
    }

    /// Registered pairs, in declaration order.
    pub fn actions(&self) -> &[ActionKey] {
        &self.order
    }

    pub fn supports(&self, key: &ActionKey) -> bool {
        self.registry.contains(key)
    }

    /// Run every item in order, one round trip each.
    ///
    /// A failing item aborts the run, unless continue-on-failure is set, in
    /// which case it leaves an `{ "error": message }` record tagged with its
    /// index and the loop moves on.
    pub async fn execute(
        &self,
        ctx: &ExecutionContext,
        items: &[ParameterValues],
    ) -> Result<Vec<ItemOutput>, ActionError> {
        let mut output = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let span = tracing::info_span!(
                "starhunter_item",
                node = self.description.name.as_str(),
                item = index,
                resource = tracing::field::Empty,
                operation = tracing::field::Empty,
            );
            match self.execute_item(ctx, index, item).instrument(span).await {
                Ok(records) => output.extend(records),
                Err(err) if ctx.continue_on_fail => {
                    tracing::warn!(item = index, kind = err.kind(), error = %err, "item failed, continuing");
                    output.push(ItemOutput::error(err.to_string(), index));
                }
                Err(err) => {
                    tracing::error!(item = index, kind = err.kind(), error = %err, "item failed");
                    return Err(err);
                }
            }
        }

        Ok(output)
    }

    async fn execute_item(
        &self,
        ctx: &ExecutionContext,
        index: usize,
        item: &ParameterValues,
    ) -> Result<Vec<ItemOutput>, ActionError> {
        let parameters = self.description.properties.resolve(item)?;

        let Some((key, action)) = self.select(&parameters, ctx.unknown_action)? else {
            return Ok(Vec::new());
        };
        let span = tracing::Span::current();
        span.record("resource", key.resource.as_str());
        span.record("operation", key.operation.as_str());

        let client = self.client(ctx).await?;
        let action_ctx = ctx.item(index, parameters);
        let request = action.build_request(&action_ctx)?;
        let response = client.execute(&request).await?;
        let output = action.unwrap_response(response.into_data()?, &action_ctx)?;

        tracing::debug!(records = output.len(), "item completed");
        Ok(output.into_items(index))
    }

    fn select(
        &self,
        parameters: &ParameterValues,
        policy: UnknownActionPolicy,
    ) -> Result<Option<(ActionKey, &Arc<dyn GraphQlAction>)>, ActionError> {
        let (resource, operation) = match self.selection {
            Selection::Fixed(key) => (key.resource.as_str(), key.operation.as_str()),
            Selection::Selectors => (
                parameters.get_string("resource").unwrap_or_default(),
                parameters.get_string("operation").unwrap_or_default(),
            ),
        };

        let found = ActionKey::parse(resource, operation)
            .ok()
            .and_then(|key| self.registry.get(&key).map(|action| (key, action)));

        match (found, policy) {
            (Some(hit), _) => Ok(Some(hit)),
            (None, UnknownActionPolicy::Skip) => {
                tracing::warn!(resource, operation, "no action registered for pair, item skipped");
                Ok(None)
            }
            (None, UnknownActionPolicy::Fail) => Err(ActionError::UnknownAction {
                resource: resource.to_owned(),
                operation: operation.to_owned(),
            }),
        }
    }

    async fn client(&self, ctx: &ExecutionContext) -> Result<StarhunterClient, ActionError> {
        let data = ctx.credentials.get(self.endpoint.credential_key()).await?;
        let credential = StarhunterCredential::from_data(self.endpoint, &data)?;
        Ok(StarhunterClient::new(Arc::clone(&ctx.http), &credential))
    }

    /// Probe the configured credential with `{ __typename }`.
    pub async fn test_credential(&self, ctx: &ExecutionContext) -> Result<(), ActionError> {
        let client = self.client(ctx).await?;
        tracing::info!(endpoint = %client.endpoint(), "testing credential");
        client.probe().await
    }
}

fn action_key(action: &dyn GraphQlAction) -> Option<ActionKey> {
    let (resource, operation) = action.metadata().key.split_once('.')?;
    ActionKey::parse(resource, operation).ok()
}

/// Operation picked when a resource is first selected.
fn default_operation(resource: Resource) -> Operation {
    match resource {
        Resource::Person => Operation::GetBirthdays,
        Resource::Email => Operation::Log,
        Resource::ProjectCandidate => Operation::GetByStatusChangeDate,
        Resource::Task => Operation::Create,
        Resource::Candidate | Resource::Employee | Resource::Project => Operation::Search,
    }
}

/// Verb phrase hosts show when an operation is offered as a tool.
fn action_phrase(key: ActionKey) -> &'static str {
    match (key.resource, key.operation) {
        (Resource::Person, Operation::GetBirthdays) => "Get persons with birthdays on a date",
        (Resource::Person, Operation::GetById) => "Get a person by ID",
        (Resource::Person, _) => "Search persons",
        (Resource::Candidate, _) => "Search candidates",
        (Resource::Employee, Operation::GetCurrent) => "Get current authenticated user",
        (Resource::Employee, _) => "Search employees",
        (Resource::Email, _) => "Log an email activity",
        (Resource::ProjectCandidate, Operation::Add) => "Add a candidate to a project",
        (Resource::ProjectCandidate, Operation::UpdateStatus) => "Update a presentation status",
        (Resource::ProjectCandidate, _) => "Get candidates by status change date",
        (Resource::Task, _) => "Create a task",
        (Resource::Project, _) => "Search projects",
    }
}

/// Resource selector, one operation selector per resource, then every
/// action's fields scoped to its pair.
fn selector_properties(
    registry: &ActionRegistry<ActionKey, dyn GraphQlAction>,
    order: &[ActionKey],
) -> ParameterCollection {
    let resources: Vec<Resource> = Resource::ALL
        .iter()
        .copied()
        .filter(|r| order.iter().any(|k| k.resource == *r))
        .collect();

    let default_resource = if resources.contains(&Resource::Person) {
        Resource::Person
    } else {
        resources.first().copied().unwrap_or(Resource::Person)
    };

    let mut properties = ParameterCollection::new().with(
        SelectParameter::new("resource", "Resource")
            .no_data_expression()
            .with_options(resources.iter().map(|r| SelectOption::keyed(r.as_str(), r.label())))
            .with_default(default_resource.as_str()),
    );

    for &resource in &resources {
        let keys: Vec<ActionKey> = Operation::ALL
            .iter()
            .map(|&op| ActionKey::new(resource, op))
            .filter(|key| order.contains(key))
            .collect();

        let preferred = ActionKey::new(resource, default_operation(resource));
        let default = if keys.contains(&preferred) {
            preferred.operation
        } else {
            keys.first().map_or(preferred.operation, |k| k.operation)
        };

        let options = keys.iter().filter_map(|key| {
            let action = registry.get(key)?;
            Some(
                SelectOption::keyed(key.operation.as_str(), key.operation.label())
                    .with_action(action_phrase(*key))
                    .with_description(action.metadata().description.clone()),
            )
        });

        properties.add(
            SelectParameter::new("operation", "Operation")
                .no_data_expression()
                .with_options(options)
                .with_default(default.as_str())
                .show_when(DisplayRuleSet::equals("resource", resource.as_str())),
        );
    }

    for key in order {
        let Some(action) = registry.get(key) else {
            continue;
        };
        let scope = DisplayRuleSet::All {
            rules: vec![
                DisplayRuleSet::equals("resource", key.resource.as_str()),
                DisplayRuleSet::equals("operation", key.operation.as_str()),
            ],
        };
        for def in &action.metadata().parameters {
            properties.add(def.clone().scoped_to(scope.clone()));
        }
    }

    properties
}
