//! Error taxonomy for the submission gateway.

use std::collections::BTreeMap;

/// Errors from the marketplace API layer.
///
/// Only [`GatewayError::Rejected`] carries per-field detail; every other
/// variant is surfaced by the wizard as a single retryable submit banner.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The outbound request failed local validation before being sent.
    #[error("Invalid creation request: {0}")]
    InvalidRequest(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected specific fields of the submission.
    #[error("Project creation was rejected for {} field(s)", errors.len())]
    Rejected {
        /// Remote field errors keyed like the wizard's own error map.
        errors: BTreeMap<String, String>,
    },

    /// The service returned a non-success response without field detail.
    #[error("Marketplace API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected envelope.
    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

impl GatewayError {
    /// `true` when retrying the same submission may succeed.
    ///
    /// Field rejections and locally invalid requests need edits first;
    /// everything else is worth a retry.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Rejected { .. } | Self::InvalidRequest(_))
    }
}
