//! REST client for the marketplace projects API.
//!
//! Wraps the creation endpoint and the read-once category listing using
//! [`reqwest`]. Outcome classification is split out of the transport path
//! so it can be exercised without a network.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::request::CreateProjectRequest;
use crate::response::{ApiEnvelope, CreatedProject};

/// Correlation-id header attached to every gateway request.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client for the marketplace API.
pub struct ProjectsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectsApi {
    /// Create a new API client from gateway configuration.
    pub fn new(config: &GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling with other API wrappers).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base HTTP URL of the marketplace API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a project creation request.
    ///
    /// Sends `POST /projects` exactly once. The outbound body is checked
    /// against its own constraints first so a malformed mapping never
    /// reaches the wire.
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<CreatedProject, GatewayError> {
        request
            .validate()
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))?;

        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(
            %request_id,
            title = %request.title,
            "Posting project creation request"
        );

        let response = self
            .client
            .post(format!("{}/projects", self.base_url))
            .header(REQUEST_ID_HEADER, &request_id)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        match parse_envelope::<CreatedProject>(status, &body) {
            Ok(created) => {
                tracing::info!(%request_id, project_id = %created.id, "Project created");
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(%request_id, status, error = %err, "Project creation failed");
                Err(err)
            }
        }
    }

    /// Retrieve the selectable project categories.
    ///
    /// Sends `GET /categories`. The wizard reads this once at
    /// initialization and never refreshes it.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        parse_envelope::<Vec<String>>(status, &body)
    }
}

// ---------------------------------------------------------------------------
// Outcome classification
// ---------------------------------------------------------------------------

/// Classify a response into the gateway's error taxonomy.
///
/// Success requires a 2xx-compatible envelope with `success: true` and a
/// data payload. A failure envelope with field errors becomes
/// [`GatewayError::Rejected`]; anything else is a retryable API or
/// envelope failure.
fn parse_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, GatewayError> {
    let envelope: ApiEnvelope<T> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(err) if (200..300).contains(&status) => {
            return Err(GatewayError::Envelope(err.to_string()));
        }
        Err(_) => {
            return Err(GatewayError::Api {
                status,
                message: "Request failed".to_string(),
            });
        }
    };

    if envelope.success {
        return envelope
            .data
            .ok_or_else(|| GatewayError::Envelope("success response without a data payload".into()));
    }

    if !envelope.errors.is_empty() {
        return Err(GatewayError::Rejected {
            errors: envelope.errors,
        });
    }

    Err(GatewayError::Api {
        status,
        message: envelope
            .message
            .unwrap_or_else(|| "Request failed".to_string()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
