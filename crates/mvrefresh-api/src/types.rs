use serde::{
    Deserialize,
    Serialize,
};

/// A SQL warehouse visible to the authenticated principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    /// Warehouse identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Current lifecycle state
    pub state: WarehouseState,
}

/// Lifecycle state of a SQL warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseState {
    Running,
    Starting,
    Stopping,
    Stopped,
    Deleting,
    Deleted,
    Unknown,
}

/// Result of a statement execution.
///
/// Rows are kept as returned by the warehouse: row-major, every value
/// stringly typed, NULL columns as `None`. Callers that only scan result
/// text never need a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementResult {
    /// Server-assigned statement identifier
    pub statement_id: String,
    /// Result rows, possibly empty
    pub rows: Vec<Vec<Option<String>>>,
}
