//! # Starhunter Node
//!
//! Workflow actions for the Starhunter recruiting CRM. Every action is one
//! GraphQL round trip against `{baseUrl}/Api/graphql`, authenticated with a
//! bearer token:
//!
//! - [`resource`]: the `(resource, operation)` pairs items dispatch on
//! - [`graphql`]: request and response envelopes
//! - [`credential`]: the two credential shapes and endpoint derivation
//! - [`client`]: the HTTP round trip and the credential probe
//! - [`actions`]: one type per supported operation
//! - [`node`]: product profiles, the node description, and the item loop
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use starhunter_action::ExecutionContext;
//! use starhunter_credential::{CredentialData, StaticCredentialProvider};
//! use starhunter_node::StarhunterNode;
//! use starhunter_parameter::values::ParameterValues;
//! use starhunter_request::{ClientConfig, ReqwestClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = StaticCredentialProvider::new().with(
//!     "starhunterApi",
//!     CredentialData::new()
//!         .with_field("baseUrl", "https://crm.example.com")
//!         .with_secret("accessToken", "token"),
//! );
//! let ctx = ExecutionContext::new(
//!     Arc::new(credentials),
//!     Arc::new(ReqwestClient::new(ClientConfig::default())?),
//! );
//!
//! let node = StarhunterNode::standard();
//! let items = [ParameterValues::new()
//!     .with("resource", "person")
//!     .with("operation", "getById")
//!     .with("personId", "p-1")];
//! let output = node.execute(&ctx, &items).await?;
//! # drop(output);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod actions;
pub mod client;
pub mod credential;
pub mod graphql;
pub mod node;
pub mod resource;

pub use action::GraphQlAction;
pub use client::StarhunterClient;
pub use credential::{EndpointStyle, STARHUNTER_API, STARHUNTER_BIRTHDAYS_API, StarhunterCredential};
pub use graphql::{GraphQlData, GraphQlRequest, GraphQlResponse, Variables};
pub use node::{NodeDescription, NodeProfile, StarhunterNode};
pub use resource::{ActionKey, Operation, Resource};
