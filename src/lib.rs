pub mod catalog;
pub mod commands;
pub mod core;
pub mod providers;
pub mod provisioner;
pub mod render;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;
use crate::core::errors::{AppError, AppResult};

fn log_level_from_env() -> LevelFilter {
    match std::env::var("LESSONART_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Installs the stdout fmt subscriber. `RUST_LOG` wins over `LESSONART_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level_from_env().into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Parses the command line and runs it on a single-threaded runtime.
pub fn run() -> AppResult<()> {
    init_logging();
    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Internal(format!("runtime: {err}")))?;
    runtime.block_on(commands::dispatch(cli))
}
