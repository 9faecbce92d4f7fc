//! Every Starhunter action, grouped by resource.

mod candidate;
mod email;
mod employee;
mod person;
mod project;
mod project_candidate;
mod task;

pub use candidate::SearchCandidates;
pub use email::LogEmail;
pub use employee::{GetCurrentEmployee, SearchEmployees};
pub use person::{GetBirthdays, GetPersonById, SearchPersons};
pub use project::SearchProjects;
pub use project_candidate::{
    AddProjectCandidate, GetByStatusChangeDate, StatusChangeVariant, UpdatePresentationStatus,
};
pub use task::CreateTask;

use starhunter_action::ActionMetadata;
use starhunter_parameter::collection::ParameterCollection;

use crate::credential::STARHUNTER_API;
use crate::resource::{ActionKey, Operation, Resource};

fn metadata(
    resource: Resource,
    operation: Operation,
    description: &str,
    parameters: ParameterCollection,
) -> ActionMetadata {
    let key = ActionKey::new(resource, operation);
    ActionMetadata::new(key.to_string(), operation.label(), description)
        .with_parameters(parameters)
        .with_required_credential(STARHUNTER_API)
}
