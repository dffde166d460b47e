//! Read-once category loading for wizard initialization.

use crewhub_core::catalog::DEFAULT_CATEGORIES;
use crewhub_gateway::{GatewayError, ProjectsApi};

/// Resolve the category list from a provider result.
///
/// An unavailable provider or an empty listing falls back to the static
/// defaults; the wizard never refreshes the list afterwards.
pub fn categories_from(result: Result<Vec<String>, GatewayError>) -> Vec<String> {
    match result {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            tracing::warn!("Category provider returned an empty list; using defaults");
            default_categories()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Category provider unavailable; using defaults");
            default_categories()
        }
    }
}

/// Fetch the selectable categories once at wizard initialization.
pub async fn load_categories(api: &ProjectsApi) -> Vec<String> {
    categories_from(api.fetch_categories().await)
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}
