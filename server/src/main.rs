mod api;
mod cleanup_task;
mod server_config;
mod session_store;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::{log, logger};

use cleanup_task::CleanupTask;
use server_config::{DEFAULT_CONFIG_PATH, ServerConfig, load_server_config};
use session_store::SessionStore;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server", version, about = "Tic-Tac-Toe web API")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file; defaults apply when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = load_server_config(&config_manager, args.bind)?;

    let store = SessionStore::new();

    if let Some(timeout) = config.session_idle_timeout() {
        log!(
            "Idle games expire after {}s, checked every {}s",
            timeout.as_secs(),
            config.cleanup_interval_secs
        );
        let cleanup_task = CleanupTask::new(store.clone(), config.cleanup_interval(), timeout);
        tokio::spawn(async move {
            cleanup_task.run().await;
        });
    }

    run_web_server(store, &config.bind_address, &config.static_files_path).await?;

    log!("Server shut down gracefully");

    Ok(())
}
