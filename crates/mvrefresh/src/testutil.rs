//! Workspace client test double

use std::collections::HashMap;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mvrefresh_api::{
    ClientError,
    ClientResult,
    StatementResult,
    Warehouse,
    WarehouseState,
    WorkspaceClient,
};

type CannedRows = Result<Vec<Vec<Option<String>>>, String>;

/// In-memory `WorkspaceClient` with canned responses and call recording
pub struct MockWorkspaceClient {
    warehouses: Result<Vec<Warehouse>, String>,
    statements: HashMap<String, CannedRows>,
    failing_updates: Vec<String>,
    pub list_calls: AtomicUsize,
    pub started_updates: Mutex<Vec<String>>,
}

impl Default for MockWorkspaceClient {
    fn default() -> Self {
        Self {
            warehouses: Ok(Vec::new()),
            statements: HashMap::new(),
            failing_updates: Vec::new(),
            list_calls: AtomicUsize::new(0),
            started_updates: Mutex::new(Vec::new()),
        }
    }
}

impl MockWorkspaceClient {
    pub fn with_warehouses(warehouses: Vec<Warehouse>) -> Self {
        Self {
            warehouses: Ok(warehouses),
            ..Self::default()
        }
    }

    pub fn with_failing_list(message: &str) -> Self {
        Self {
            warehouses: Err(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_statement_rows(mut self, statement: &str, rows: Vec<Vec<Option<String>>>) -> Self {
        self.statements.insert(statement.to_string(), Ok(rows));
        self
    }

    pub fn with_failing_statement(mut self, statement: &str, message: &str) -> Self {
        self.statements
            .insert(statement.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_failing_update(mut self, pipeline_id: &str) -> Self {
        self.failing_updates.push(pipeline_id.to_string());
        self
    }
}

#[async_trait]
impl WorkspaceClient for MockWorkspaceClient {
    async fn execute_statement(
        &self, _warehouse_id: &str, statement: &str, _wait_timeout: Duration,
    ) -> ClientResult<StatementResult> {
        match self.statements.get(statement) {
            Some(Ok(rows)) => Ok(StatementResult {
                statement_id: "stmt-test".to_string(),
                rows: rows.clone(),
            }),
            Some(Err(message)) => Err(ClientError::Api(message.clone())),
            None => Err(ClientError::Api(format!(
                "no canned result for: {statement}"
            ))),
        }
    }

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match &self.warehouses {
            Ok(warehouses) => Ok(warehouses.clone()),
            Err(message) => Err(ClientError::Api(message.clone())),
        }
    }

    async fn start_pipeline_update(&self, pipeline_id: &str) -> ClientResult<String> {
        self.started_updates
            .lock()
            .unwrap()
            .push(pipeline_id.to_string());

        if self.failing_updates.iter().any(|id| id == pipeline_id) {
            return Err(ClientError::Api(format!(
                "update rejected for {pipeline_id}"
            )));
        }

        Ok(format!("update-{pipeline_id}"))
    }
}

pub fn warehouse(id: &str, state: WarehouseState) -> Warehouse {
    Warehouse {
        id: id.to_string(),
        name: format!("{id}-name"),
        state,
    }
}
