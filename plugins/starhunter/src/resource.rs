//! Dispatch keys: the resource and operation an input item selects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A selector value that names no known resource or operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $value:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire value used in parameters and selectors.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Human-readable label for selector options.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(UnknownKey {
                        kind: $kind,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

selector_enum! {
    /// Starhunter entity families.
    Resource, "resource" {
        Candidate => "candidate", "Candidate";
        Email => "email", "Email";
        Employee => "employee", "Employee";
        Person => "person", "Person";
        Project => "project", "Project";
        ProjectCandidate => "projectCandidate", "Project Candidate";
        Task => "task", "Task";
    }
}

selector_enum! {
    /// Operations across all resources. Which pairs exist is decided by
    /// the node's registry, not by this enum.
    Operation, "operation" {
        Add => "add", "Add";
        Create => "create", "Create";
        GetBirthdays => "getBirthdays", "Get Birthdays";
        GetById => "getById", "Get by ID";
        GetByStatusChangeDate => "getByStatusChangeDate", "Get By Status Change Date";
        GetCurrent => "getCurrent", "Get Current User";
        Log => "log", "Log Email";
        Search => "search", "Search";
        UpdateStatus => "updateStatus", "Update Status";
    }
}

/// Registry key: one resource/operation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionKey {
    pub resource: Resource,
    pub operation: Operation,
}

impl ActionKey {
    #[must_use]
    pub const fn new(resource: Resource, operation: Operation) -> Self {
        Self {
            resource,
            operation,
        }
    }

    /// Parse the raw selector values read from an item.
    pub fn parse(resource: &str, operation: &str) -> Result<Self, UnknownKey> {
        Ok(Self::new(resource.parse()?, operation.parse()?))
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("projectCandidate", Resource::ProjectCandidate)]
    #[case("person", Resource::Person)]
    #[case("task", Resource::Task)]
    fn resource_wire_values(#[case] raw: &str, #[case] expected: Resource) {
        assert_eq!(raw.parse::<Resource>().unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = "company".parse::<Resource>().unwrap_err();
        assert_eq!(err.to_string(), "unknown resource `company`");
        let err = ActionKey::parse("person", "delete").unwrap_err();
        assert_eq!(err.kind, "operation");
    }

    #[test]
    fn key_display_and_serde() {
        let key = ActionKey::parse("person", "getBirthdays").unwrap();
        assert_eq!(key, ActionKey::new(Resource::Person, Operation::GetBirthdays));
        assert_eq!(key.to_string(), "person.getBirthdays");
        assert_eq!(
            serde_json::to_value(key).unwrap(),
            serde_json::json!({ "resource": "person", "operation": "getBirthdays" })
        );
    }

    #[test]
    fn all_lists_every_variant() {
        assert_eq!(Resource::ALL.len(), 7);
        assert!(Operation::ALL.contains(&Operation::GetByStatusChangeDate));
        assert_eq!(Operation::GetCurrent.label(), "Get Current User");
    }
}
