//! Gateway configuration loaded from environment variables.

/// Connection settings for the marketplace API.
///
/// All fields have defaults suitable for local development against the
/// dev-server proxy. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the marketplace API (default: `http://localhost:3000/api`).
    pub base_url: String,
    /// HTTP request timeout in seconds (default: `10`).
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                     |
    /// |--------------------------------|-----------------------------|
    /// | `CREWHUB_API_URL`              | `http://localhost:3000/api` |
    /// | `CREWHUB_REQUEST_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("CREWHUB_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".into());

        let request_timeout_secs: u64 = std::env::var("CREWHUB_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CREWHUB_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".into(),
            request_timeout_secs: 10,
        }
    }
}
