//! Data mapping from API payloads to domain types

use mvrefresh_api::{
    ClientError,
    ClientResult,
    StatementResult,
    Warehouse,
    WarehouseState,
};

use crate::types;

/// Maps a warehouse state string to WarehouseState
pub(crate) fn map_warehouse_state(state: &str) -> WarehouseState {
    match state {
        "RUNNING" => WarehouseState::Running,
        "STARTING" => WarehouseState::Starting,
        "STOPPING" => WarehouseState::Stopping,
        "STOPPED" => WarehouseState::Stopped,
        "DELETING" => WarehouseState::Deleting,
        "DELETED" => WarehouseState::Deleted,
        _ => WarehouseState::Unknown,
    }
}

pub(crate) fn map_warehouse(info: types::WarehouseInfo) -> Warehouse {
    Warehouse {
        state: map_warehouse_state(&info.state),
        id: info.id,
        name: info.name,
    }
}

/// Maps a statement response into result rows, or the statement's own error
/// when it did not succeed
pub(crate) fn map_statement_response(
    response: types::StatementResponse,
) -> ClientResult<StatementResult> {
    match response.status.state.as_str() {
        "SUCCEEDED" => Ok(StatementResult {
            statement_id: response.statement_id,
            rows: response
                .result
                .map(|data| data.data_array)
                .unwrap_or_default(),
        }),
        state => {
            let message = response
                .status
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("statement finished in state {state}"));
            Err(ClientError::StatementFailed(message))
        }
    }
}
