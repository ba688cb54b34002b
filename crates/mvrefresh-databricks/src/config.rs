//! Workspace connection configuration

use mvrefresh_api::{
    ClientError,
    ClientResult,
};
use secrecy::SecretString;

/// Environment variable holding the workspace URL
pub const HOST_ENV: &str = "DATABRICKS_HOST";
/// Environment variable holding the personal access token
pub const TOKEN_ENV: &str = "DATABRICKS_TOKEN";

/// Connection coordinates for a Databricks workspace
pub struct DatabricksConfig {
    /// Workspace base URL, scheme included, no trailing slash
    pub host: String,
    /// Bearer token for the control-plane API
    pub token: SecretString,
}

impl DatabricksConfig {
    pub fn new(host: &str, token: SecretString) -> Self {
        Self {
            host: normalize_host(host),
            token,
        }
    }

    /// Reads the workspace coordinates from the environment, once, at the
    /// program boundary
    pub fn from_env() -> ClientResult<Self> {
        let host = non_empty_var(HOST_ENV)?;
        let token = non_empty_var(TOKEN_ENV)?;
        Ok(Self::new(&host, SecretString::from(token)))
    }
}

fn non_empty_var(name: &str) -> ClientResult<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ClientError::InvalidConfig(format!("{name} is not set")))
}

fn normalize_host(host: &str) -> String {
    let cleaned = host.trim().trim_end_matches('/');
    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        cleaned.to_string()
    } else {
        format!("https://{cleaned}")
    }
}
