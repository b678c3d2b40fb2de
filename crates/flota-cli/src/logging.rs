//! Tracing setup. The TUI owns the terminal, so logs go to a daily rolling
//! file unless `--log-stderr` is given.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use flota_core::config::APP_DIR_NAME;

pub const LOG_ENV_VAR: &str = "FLOTA_LOG";
const LOG_FILE_NAME: &str = "flota.log";
const DEFAULT_FILTER: &str = "flota_core=info,flota_cli=info,warn";

/// Level is controlled by `FLOTA_LOG`, e.g. `FLOTA_LOG=flota_core=debug`.
pub fn init(to_stderr: bool) -> std::io::Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let timer = fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string());

    if to_stderr {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_timer(timer),
            )
            .init();
        return Ok(());
    }

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "flota starting");
    tracing::info!("log directory: {}", log_dir.display());
    Ok(())
}

pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("logs")
}
