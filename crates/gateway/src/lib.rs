//! Submission gateway for the crewhub marketplace API.
//!
//! Maps a validated [`crewhub_core::draft::ProjectDraft`] to the creation
//! endpoint's wire shape, invokes the asynchronous create-project operation
//! exactly once per accepted submission, and classifies the outcome into
//! the wizard's error taxonomy. Also serves the read-once category listing
//! consumed at wizard initialization.

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod submitter;

pub use api::ProjectsApi;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use request::CreateProjectRequest;
pub use response::CreatedProject;
pub use submitter::ProjectSubmitter;
