//! SQL warehouse resolution for discovery queries

use std::sync::LazyLock;

use mvrefresh_api::{
    WarehouseState,
    WorkspaceClient,
};
use regex::Regex;
use thiserror::Error;

/// Environment variable naming the warehouse to run discovery queries on
pub const WAREHOUSE_ID_ENV: &str = "DATABRICKS_WAREHOUSE_ID";
/// Environment variable holding an HTTP path such as `/sql/1.0/warehouses/abc123`
pub const HTTP_PATH_ENV: &str = "DATABRICKS_HTTP_PATH";

static WAREHOUSE_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/warehouses/([a-f0-9]+)").expect("Invalid regex pattern"));

/// No warehouse could be determined
#[derive(Error, Debug)]
#[error(
    "Could not determine warehouse ID. Set DATABRICKS_WAREHOUSE_ID or DATABRICKS_HTTP_PATH \
     environment variable."
)]
pub struct ResolveError;

/// Warehouse selection overrides, sourced once from the environment at the
/// program boundary so resolution itself stays free of global state
#[derive(Debug, Clone, Default)]
pub struct WarehouseOverrides {
    pub warehouse_id: Option<String>,
    pub http_path: Option<String>,
}

impl WarehouseOverrides {
    pub fn from_env() -> Self {
        Self {
            warehouse_id: std::env::var(WAREHOUSE_ID_ENV).ok(),
            http_path: std::env::var(HTTP_PATH_ENV).ok(),
        }
    }
}

/// Resolves the warehouse to run discovery queries against.
///
/// First match wins: the explicit override, the ID embedded in the HTTP
/// path, the first running warehouse, the first warehouse in any state.
pub async fn resolve_warehouse_id(
    overrides: &WarehouseOverrides, client: &dyn WorkspaceClient,
) -> Result<String, ResolveError> {
    if let Some(id) = overrides.warehouse_id.as_deref().filter(|id| !id.is_empty()) {
        return Ok(id.to_string());
    }

    if let Some(path) = overrides.http_path.as_deref() {
        if let Some(id) = warehouse_id_from_http_path(path) {
            return Ok(id);
        }
    }

    if let Ok(warehouses) = client.list_warehouses().await {
        if let Some(running) = warehouses
            .iter()
            .find(|w| w.state == WarehouseState::Running)
        {
            return Ok(running.id.clone());
        }
        if let Some(first) = warehouses.first() {
            return Ok(first.id.clone());
        }
    }

    Err(ResolveError)
}

/// Extracts a warehouse ID from an HTTP-path-style value
pub fn warehouse_id_from_http_path(path: &str) -> Option<String> {
    WAREHOUSE_PATH_PATTERN
        .captures(path)
        .map(|caps| caps[1].to_string())
}
