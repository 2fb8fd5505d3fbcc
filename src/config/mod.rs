//! Runtime configuration module
//!
//! Environment-derived defaults are resolved once at startup into an
//! explicit [`ApiConfig`] that is passed into every operation; nothing reads
//! the environment after argument parsing.

use std::path::Path;

/// Placeholder console endpoint used when `COMPUTE_API_ENDPOINT` is unset
pub const DEFAULT_API_ENDPOINT: &str = "https://us-east1.cloud.twistlock.com/us-1-23456789";

/// Connection settings for one invocation
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Console base URL, without a trailing slash
    pub endpoint: String,
    /// Access key id or username
    pub username: String,
    /// Secret key or password
    pub password: String,
    /// Skip TLS certificate verification
    pub skip_verify: bool,
}

impl ApiConfig {
    /// Create a configuration, normalizing the endpoint
    #[must_use]
    pub fn new(endpoint: &str, username: &str, password: &str, skip_verify: bool) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            skip_verify,
        }
    }
}

/// Load a local `.env` file into the process environment when one exists
///
/// Must run before argument parsing so the values are visible to the
/// env-backed CLI defaults.
pub fn load_env_file() {
    if Path::new(".env").exists() {
        // Parse failures are ignored; flags and the real environment
        // still apply
        drop(dotenvy::dotenv());
    }
}

/// Read the `SKIP_VERIFY` 0/1 toggle from the environment
#[must_use]
pub fn skip_verify_from_env() -> bool {
    parse_skip_verify(std::env::var("SKIP_VERIFY").ok().as_deref())
}

/// Parse a 0/1 toggle value; unset or non-numeric means off
fn parse_skip_verify(raw: Option<&str>) -> bool {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .is_some_and(|value| value != 0)
}
