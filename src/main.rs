use std::sync::Arc;

use cinescope::adapters::{FileUserDataStore, ReqwestHttpClient};
use cinescope::cli::{parse_args, run_cli_command, version_line, AppContext, CliCommand, USAGE};
use cinescope::config::{ApiConfig, StorageConfig};
use cinescope::error::AppError;
use cinescope::logging::init_tracing;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Handle version and help before touching config or storage
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(command))
}

async fn run(command: CliCommand) -> Result<()> {
    let api = ApiConfig::from_env().wrap_err("Invalid API configuration")?;
    let storage = StorageConfig::from_env().wrap_err("Invalid storage configuration")?;

    let http = ReqwestHttpClient::with_timeout(api.timeout()).map_err(AppError::from)?;
    let store = FileUserDataStore::in_dir(&storage.data_dir);
    tracing::debug!(api = %api.base_url, prefs = %store.path().display(), "Starting");

    let context = AppContext::new(Arc::new(http), &api, Arc::new(store)).await?;
    run_cli_command(command, &context).await
}
