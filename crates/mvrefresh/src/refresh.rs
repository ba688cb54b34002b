//! Pipeline refresh triggering

use mvrefresh_api::WorkspaceClient;

/// Starts an update for each pipeline, in argument order. Success and
/// failure are reported per item; one failure never stops the rest.
pub async fn refresh_pipelines(client: &dyn WorkspaceClient, pipeline_ids: &[String]) {
    for pipeline_id in pipeline_ids {
        println!("Starting refresh for pipeline: {pipeline_id}");

        match client.start_pipeline_update(pipeline_id).await {
            Ok(update_id) => {
                tracing::debug!(pipeline_id = %pipeline_id, update_id = %update_id, "update started");
                println!("  ✓ Refresh started successfully");
            }
            Err(e) => println!("  ✗ Error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockWorkspaceClient;

    #[tokio::test]
    async fn test_refreshes_in_argument_order() {
        let client = MockWorkspaceClient::default();
        let ids = vec!["p1".to_string(), "p2".to_string()];

        refresh_pipelines(&client, &ids).await;

        assert_eq!(
            *client.started_updates.lock().unwrap(),
            vec!["p1".to_string(), "p2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_the_batch() {
        let client = MockWorkspaceClient::default().with_failing_update("p1");
        let ids = vec!["p1".to_string(), "p2".to_string()];

        refresh_pipelines(&client, &ids).await;

        // p1 was attempted and failed, p2 was still attempted
        assert_eq!(
            *client.started_updates.lock().unwrap(),
            vec!["p1".to_string(), "p2".to_string()]
        );
    }
}
