mod app;
mod config;
mod controller;
mod layout;
mod particles;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::logger::init_logger;
use common::{log, log_warn};
use eframe::egui;

use app::TicTacToeApp;
use config::{DesktopConfig, get_config_manager};
use layout::{HEIGHT, WIDTH};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_desktop")]
#[command(about = "Tic-Tac-Toe desktop game", long_about = None)]
struct Args {
    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<PathBuf>) -> DesktopConfig {
    get_config_manager(path).get_config().unwrap_or_else(|e| {
        log_warn!("Failed to load config, using defaults: {}", e);
        DesktopConfig::default()
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    init_logger(prefix);

    let config = load_config(args.config);
    log!("Starting with bot delay {}ms", config.bot_delay_ms);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIDTH, HEIGHT])
            .with_resizable(false)
            .with_title("Tic-Tac-Toe Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe Game",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(config)))),
    )?;

    Ok(())
}
