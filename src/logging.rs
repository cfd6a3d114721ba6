use std::fs;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

/// Installs the global subscriber using the process-wide settings.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// as long as the process logs.
pub fn init() -> anyhow::Result<WorkerGuard> {
    init_with(&CONFIG.logging)
}

pub fn init_with(cfg: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let stdout_filter = cfg
        .stdout_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;
    let file_filter = cfg
        .file_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;

    fs::create_dir_all(&cfg.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "finalize_runner.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer().with_ansi(true).with_filter(stdout_filter);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    info!(
        target: "finalize_runner::logging",
        log_dir = %cfg.log_dir,
        stdout_level = %cfg.stdout_level,
        file_level = %cfg.file_level,
        "Logging initialized"
    );
    Ok(guard)
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("finalize_runner=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
