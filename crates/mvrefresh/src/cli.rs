//! Command-line surface

use clap::Parser;

const AFTER_HELP: &str = "Examples:
  # Discover pipeline IDs for metric views
  mvrefresh --discover <catalog>.<schema>.mv_order_metrics

  # Refresh by pipeline ID
  mvrefresh 01484540-0a06-414a-b10f-e1b0e8097f15

  # Discover and refresh in one go
  mvrefresh --refresh <catalog>.<schema>.mv_order_metrics

Environment:
  DATABRICKS_HOST, DATABRICKS_TOKEN   workspace URL and access token
  DATABRICKS_WAREHOUSE_ID             SQL warehouse for discovery queries
  DATABRICKS_HTTP_PATH                warehouse derived from its /warehouses/<id> suffix";

/// Trigger refreshes of materialized metric views.
///
/// Looks up the Lakeflow pipeline backing each metric view and starts an
/// update for it through the workspace API.
#[derive(Parser, Debug)]
#[command(name = "mvrefresh", after_help = AFTER_HELP)]
pub struct Cli {
    /// Look up the backing pipeline ID for each metric view, without refreshing
    #[arg(long, value_name = "VIEW", num_args = 1.., conflicts_with = "refresh")]
    discover: Option<Vec<String>>,

    /// Discover the backing pipeline for each metric view, then refresh all of them
    #[arg(long, value_name = "VIEW", num_args = 1..)]
    refresh: Option<Vec<String>>,

    /// Pipeline IDs to refresh directly, skipping discovery
    #[arg(value_name = "PIPELINE_ID")]
    pipeline_ids: Vec<String>,
}

/// Selected mode of operation, one per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Discover(Vec<String>),
    DiscoverAndRefresh(Vec<String>),
    RefreshByIds(Vec<String>),
}

impl Cli {
    pub fn mode(self) -> Mode {
        if let Some(views) = self.discover {
            Mode::Discover(views)
        } else if let Some(views) = self.refresh {
            Mode::DiscoverAndRefresh(views)
        } else if !self.pipeline_ids.is_empty() {
            Mode::RefreshByIds(self.pipeline_ids)
        } else {
            Mode::Help
        }
    }
}
