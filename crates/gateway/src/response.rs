//! Response envelope types for the marketplace API.
//!
//! Every marketplace endpoint wraps its payload in the same
//! `{ success, data, message, errors }` envelope; `errors` carries
//! per-field rejection detail keyed like the wizard's own error map.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Standard `{ success, data, message, errors }` response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

/// Acknowledgement for a newly created project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProject {
    /// Server-assigned identifier of the new project.
    pub id: String,
}
