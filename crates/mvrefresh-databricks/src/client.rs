//! HTTP client for the Databricks control-plane API

use std::time::Duration;

use async_trait::async_trait;
use mvrefresh_api::{
    ClientError,
    ClientResult,
    RetryPolicy,
    StatementResult,
    Warehouse,
    WorkspaceClient,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    AUTHORIZATION,
};
use reqwest::{
    Client,
    Response,
    StatusCode,
};
use secrecy::ExposeSecret;

use crate::config::DatabricksConfig;
use crate::{
    mapper,
    types,
};

/// Databricks workspace client backed by the REST control-plane API.
///
/// Warehouse listing is an idempotent GET and goes through the retry
/// policy; statement execution and pipeline updates are single-shot.
pub struct DatabricksClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl DatabricksClient {
    pub fn new(config: &DatabricksConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.expose_secret()))
            .map_err(|e| ClientError::InvalidConfig(format!("Invalid token format: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        // The request timeout must outlive the 30s statement wait
        let client = Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.host.clone(),
            retry: RetryPolicy::default(),
        })
    }
}

#[async_trait]
impl WorkspaceClient for DatabricksClient {
    async fn execute_statement(
        &self, warehouse_id: &str, statement: &str, wait_timeout: Duration,
    ) -> ClientResult<StatementResult> {
        let url = format!("{}/api/2.0/sql/statements", self.base_url);
        let body = types::ExecuteStatementRequest {
            statement,
            warehouse_id,
            wait_timeout: format!("{}s", wait_timeout.as_secs()),
            on_wait_timeout: "CANCEL",
        };

        tracing::debug!(warehouse_id, statement, "executing statement");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to execute statement: {e}")))?;
        let response = error_for_status(response).await?;

        let parsed: types::StatementResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Api(format!("Failed to parse statement response: {e}")))?;

        mapper::map_statement_response(parsed)
    }

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        self.retry
            .retry(|| async {
                let url = format!("{}/api/2.0/sql/warehouses", self.base_url);

                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| ClientError::Network(format!("Failed to list warehouses: {e}")))?;
                let response = error_for_status(response).await?;

                let parsed: types::ListWarehousesResponse = response.json().await.map_err(|e| {
                    ClientError::Api(format!("Failed to parse warehouse list: {e}"))
                })?;

                Ok(parsed
                    .warehouses
                    .into_iter()
                    .map(mapper::map_warehouse)
                    .collect())
            })
            .await
    }

    async fn start_pipeline_update(&self, pipeline_id: &str) -> ClientResult<String> {
        let url = format!("{}/api/2.0/pipelines/{pipeline_id}/updates", self.base_url);

        tracing::debug!(pipeline_id, "starting pipeline update");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to start pipeline update: {e}")))?;
        let response = error_for_status(response).await?;

        let parsed: types::StartUpdateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Api(format!("Failed to parse update response: {e}")))?;

        Ok(parsed.update_id)
    }
}

async fn error_for_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::AuthenticationFailed(
            format!("{status}: {error_text}"),
        )),
        _ => Err(ClientError::Api(format!(
            "Request failed with {status}: {error_text}"
        ))),
    }
}
