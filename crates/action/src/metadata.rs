use starhunter_parameter::collection::ParameterCollection;

/// Static metadata describing an action.
#[derive(Debug, Clone)]
pub struct ActionMetadata {
    /// Unique key identifying this action (e.g. `"person.getById"`).
    pub key: String,
    /// Human-readable display name (e.g. `"Get by ID"`).
    pub name: String,
    /// Short description of what this action does.
    pub description: String,
    /// Operation-specific form fields, shown once the action is selected.
    pub parameters: ParameterCollection,
    /// Credential types this action requires, referenced by key.
    pub required_credentials: Vec<String>,
}

impl ActionMetadata {
    /// Create metadata with the minimum required fields.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            parameters: ParameterCollection::new(),
            required_credentials: Vec::new(),
        }
    }

    /// Set the form fields for this action.
    pub fn with_parameters(mut self, parameters: ParameterCollection) -> Self {
        self.parameters = parameters;
        self
    }

    /// Add a credential type this action requires.
    pub fn with_required_credential(mut self, credential_key: impl Into<String>) -> Self {
        self.required_credentials.push(credential_key.into());
        self
    }
}
