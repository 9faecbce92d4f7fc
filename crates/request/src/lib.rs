//! Authenticated request helper.
//!
//! Nodes describe a call as an [`HttpRequest`] and hand it to an
//! [`HttpClient`]. The helper owns the transport policy (TLS, per-call
//! timeout, status validation) so every action gets the same behavior;
//! the [`ReqwestClient`] is the production implementation.

pub mod auth;
pub mod client;
pub mod error;
pub mod method;
pub mod request;
pub mod response;

pub use auth::RequestAuth;
pub use client::{ClientConfig, DEFAULT_TIMEOUT, HttpClient, ReqwestClient};
pub use error::RequestError;
pub use method::RequestMethod;
pub use request::HttpRequest;
pub use response::HttpResponse;
