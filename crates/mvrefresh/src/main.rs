mod cli;
mod discover;
mod logging;
mod refresh;
#[cfg(test)]
mod testutil;
mod warehouse;

use std::process::ExitCode;

use clap::{
    CommandFactory,
    Parser,
};
use mvrefresh_api::WorkspaceClient;
use mvrefresh_databricks::{
    DatabricksClient,
    DatabricksConfig,
};

use crate::cli::{
    Cli,
    Mode,
};
use crate::warehouse::WarehouseOverrides;

#[tokio::main]
async fn main() -> ExitCode {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help/--version land here too and exit clean; real usage
            // errors exit 1
            let code = u8::from(e.use_stderr());
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let mode = cli.mode();
    if mode == Mode::Help {
        let _ = Cli::command().print_long_help();
        return ExitCode::from(1);
    }

    let Some(client) = acquire_client() else {
        return ExitCode::from(1);
    };
    let overrides = WarehouseOverrides::from_env();

    match run(mode, &client, &overrides).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Builds the workspace client from ambient configuration, failing fast so
/// no later operation has to deal with credentials
fn acquire_client() -> Option<DatabricksClient> {
    let built = DatabricksConfig::from_env().and_then(|config| DatabricksClient::new(&config));

    match built {
        Ok(client) => Some(client),
        Err(e) => {
            println!("Error: workspace access is not configured ({e}).");
            println!("Set DATABRICKS_HOST and DATABRICKS_TOKEN for your workspace, then retry.");
            None
        }
    }
}

async fn run(
    mode: Mode, client: &dyn WorkspaceClient, overrides: &WarehouseOverrides,
) -> Result<u8, warehouse::ResolveError> {
    match mode {
        // Help never reaches this point; main prints usage before a client exists
        Mode::Help => Ok(1),

        Mode::Discover(views) => {
            for view in &views {
                discover::discover_pipeline(client, overrides, view).await?;
            }
            Ok(0)
        }

        Mode::DiscoverAndRefresh(views) => {
            let mut pipeline_ids = Vec::new();
            for view in &views {
                if let Some(pipeline_id) =
                    discover::discover_pipeline(client, overrides, view).await?
                {
                    pipeline_ids.push(pipeline_id);
                }
            }

            if pipeline_ids.is_empty() {
                println!("No pipelines found to refresh.");
                return Ok(1);
            }

            refresh::refresh_pipelines(client, &pipeline_ids).await;
            Ok(0)
        }

        Mode::RefreshByIds(pipeline_ids) => {
            refresh::refresh_pipelines(client, &pipeline_ids).await;
            Ok(0)
        }
    }
}
