//! Pipeline discovery for metric views

use std::sync::LazyLock;
use std::time::Duration;

use mvrefresh_api::WorkspaceClient;
use regex::Regex;

use crate::warehouse::{
    self,
    ResolveError,
    WarehouseOverrides,
};

/// Wait bound for DESCRIBE EXTENDED statements
const STATEMENT_WAIT: Duration = Duration::from_secs(30);

// DESCRIBE EXTENDED output embeds the pipeline URL in its "Refresh
// information" section; the ID is the hex/hyphen token after "pipelines/".
// A change to that upstream shape is a compatibility break, not something
// this pattern can absorb.
static PIPELINE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pipelines/([a-f0-9-]+)").expect("Invalid regex pattern"));

/// Looks up the pipeline backing a metric view via DESCRIBE EXTENDED.
///
/// Statement failures are reported and mapped to `None` so a single view
/// cannot abort a batch. A warehouse-resolution failure is returned as an
/// error instead: it would fail identically for every remaining view.
pub async fn discover_pipeline(
    client: &dyn WorkspaceClient, overrides: &WarehouseOverrides, view: &str,
) -> Result<Option<String>, ResolveError> {
    println!("Looking up pipeline for: {view}");

    let warehouse_id = warehouse::resolve_warehouse_id(overrides, client).await?;
    let statement = format!("DESCRIBE EXTENDED {view}");

    match client
        .execute_statement(&warehouse_id, &statement, STATEMENT_WAIT)
        .await
    {
        Ok(result) => {
            for row in &result.rows {
                if let Some(pipeline_id) = extract_pipeline_id(&row_text(row)) {
                    println!("  Found pipeline ID: {pipeline_id}");
                    return Ok(Some(pipeline_id));
                }
            }

            println!("  No pipeline found. Make sure the metric view has materialization enabled.");
            Ok(None)
        }
        Err(e) => {
            println!("  Error: {e}");
            println!();
            println!("  Alternatively, run this SQL in Databricks:");
            println!("    DESCRIBE EXTENDED {view};");
            println!("  Look for the 'Refresh information' section; the pipeline URL contains the pipeline ID");
            Ok(None)
        }
    }
}

/// Stringifies a result row wholesale; rows are scanned as one text blob,
/// never parsed column by column
fn row_text(row: &[Option<String>]) -> String {
    row.iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the first pipeline ID from result text
pub fn extract_pipeline_id(text: &str) -> Option<String> {
    PIPELINE_ID_PATTERN
        .captures(text)
        .map(|caps| caps[1].to_string())
}
