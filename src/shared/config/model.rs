use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("FINALIZE_RUNNER_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `path` (any format the `config` crate knows). The file
/// is optional; missing keys fall back to built-in defaults.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .add_source(config::File::with_name(path).required(false))
        .build()?
        .try_deserialize()
}
