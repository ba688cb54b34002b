use std::time::Duration;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::types::{
    StatementResult,
    Warehouse,
};

/// Control-plane operations consumed by the refresh tooling.
///
/// Implementations own transport, authentication and retry behavior; callers
/// treat the workspace as an opaque remote service and inject the client as
/// a trait object.
#[async_trait]
pub trait WorkspaceClient: Send + Sync {
    /// Execute a single SQL statement on the given warehouse, waiting up to
    /// `wait_timeout` for the result
    async fn execute_statement(
        &self, warehouse_id: &str, statement: &str, wait_timeout: Duration,
    ) -> ClientResult<StatementResult>;

    /// List the SQL warehouses of the workspace
    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>>;

    /// Start an update of the given pipeline, returning the update id
    async fn start_pipeline_update(&self, pipeline_id: &str) -> ClientResult<String>;
}
