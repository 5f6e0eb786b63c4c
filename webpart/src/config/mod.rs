use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment overrides, e.g. `SECTION_BACKGROUND__WEBPART__DESCRIPTION`
pub const ENV_PREFIX: &str = "SECTION_BACKGROUND";

/// Default configuration file, optional when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Load configuration from `path` (required) or `config.toml` (optional),
/// with environment variables layered on top.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the configuration once and keep it for the rest of the process.
pub fn init_config(path: Option<&Path>) -> AppResult<&'static AppConfig> {
    CONFIG.get_or_try_init(|| match load_config(path) {
        ConfigLoadResult::Success(config) => {
            log::debug!("Configuration loaded");
            Ok(*config)
        }
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            Err(AppError::Config(msg))
        }
    })
}

/// The configuration loaded by [`init_config`], if any.
pub fn get_config() -> Option<&'static AppConfig> {
    CONFIG.get()
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StaleVariablePolicy;
    use claims::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn expect_success(result: ConfigLoadResult) -> AppConfig {
        match result {
            ConfigLoadResult::Success(config) => *config,
            other => panic!("Expected config to load, got {other:?}"),
        }
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r#"
            [webpart]
            description = "From file"

            [theme]
            themes_dir = "custom-themes"
            name = "dark"
            stale_variables = "retain"

            [logging]
            level = "debug"
            file = "out.log"
            "#,
        );

        let config = expect_success(load_config(Some(&path)));
        assert_eq!(config.webpart().description, "From file");
        assert_eq!(config.theme().themes_dir(), "custom-themes");
        assert_eq!(config.theme().name(), Some("dark"));
        assert_eq!(config.theme().stale_variables(), StaleVariablePolicy::Retain);
        assert_eq!(config.logging().level(), "debug");
        assert_eq!(config.logging().file(), Some("out.log"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (_dir, path) = write_config("");

        let config = expect_success(load_config(Some(&path)));
        assert_eq!(config.webpart().description, "SectionBackground");
        assert_eq!(config.theme().name(), None);
        assert_eq!(config.logging().level(), "info");
        assert_none!(config.logging().file());
    }

    #[test]
    fn test_validation_errors_are_collected() {
        let (_dir, path) = write_config(
            r#"
            [theme]
            name = "../etc"

            [logging]
            level = "loud"
            "#,
        );

        match load_config(Some(&path)) {
            ConfigLoadResult::DeserializeError(msg) => {
                assert!(msg.contains("Unknown log level"));
                assert!(msg.contains("Invalid theme name"));
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert_matches!(load_config(Some(&path)), ConfigLoadResult::LoadError(_));
    }
}
