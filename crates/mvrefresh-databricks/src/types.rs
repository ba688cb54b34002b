//! API request and response types for the Databricks control plane
//!
//! These types are internal implementation details for serializing requests
//! to and deserializing responses from the REST API.

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Serialize)]
pub(crate) struct ExecuteStatementRequest<'a> {
    pub statement: &'a str,
    pub warehouse_id: &'a str,
    pub wait_timeout: String,
    pub on_wait_timeout: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementResponse {
    pub statement_id: String,
    pub status: StatementStatus,
    pub result: Option<StatementResultData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementStatus {
    pub state: String,
    pub error: Option<StatementError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementError {
    #[serde(default)]
    #[allow(dead_code)]
    pub error_code: String,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementResultData {
    #[serde(default)]
    pub data_array: Vec<Vec<Option<String>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListWarehousesResponse {
    #[serde(default)]
    pub warehouses: Vec<WarehouseInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WarehouseInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartUpdateResponse {
    pub update_id: String,
}
