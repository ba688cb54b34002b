//! Databricks implementation of the mvrefresh workspace client
//!
//! Talks to the workspace control-plane REST API:
//! - `client` - HTTP client implementing `WorkspaceClient`
//! - `config` - workspace coordinates sourced from the environment
//! - `types` - API request/response payloads
//! - `mapper` - payload to domain type conversion

mod client;
mod config;
mod mapper;
mod types;

pub use client::DatabricksClient;
pub use config::DatabricksConfig;
