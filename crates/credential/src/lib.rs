//! Credential handling for the Starhunter integration.
//!
//! - [`SecretString`]: zeroizing, redacted string for access tokens
//! - [`CredentialDescription`]: the declarative form a credential type exposes
//! - [`CredentialData`]: a resolved credential record (public fields + secrets)
//! - [`CredentialProvider`]: the port a host implements to hand records to nodes

pub mod data;
pub mod description;
pub mod error;
pub mod provider;
pub mod secret;

pub use data::CredentialData;
pub use description::CredentialDescription;
pub use error::CredentialError;
pub use provider::{CredentialProvider, StaticCredentialProvider};
pub use secret::SecretString;
