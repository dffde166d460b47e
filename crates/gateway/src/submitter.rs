//! Gateway seam consumed by the wizard controller.

use async_trait::async_trait;

use crate::api::ProjectsApi;
use crate::error::GatewayError;
use crate::request::CreateProjectRequest;
use crate::response::CreatedProject;

/// The asynchronous create-project operation.
///
/// The wizard controller depends on this trait instead of the concrete
/// HTTP client so submission handling can be exercised against test
/// doubles.
#[async_trait]
pub trait ProjectSubmitter: Send + Sync {
    /// Invoke the external creation operation once.
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, GatewayError>;
}

#[async_trait]
impl ProjectSubmitter for ProjectsApi {
    async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, GatewayError> {
        ProjectsApi::create_project(self, request).await
    }
}
