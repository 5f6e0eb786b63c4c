use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: '{level}'")]
    LogLevel { level: String },
    #[error("Invalid theme.name: '{name}' ({reason})")]
    ThemeName { name: String, reason: String },
    #[error("theme.themes_dir must not be empty")]
    EmptyThemesDir,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { level } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {level}\n\
                    Valid values: trace, debug, info, warn, error\n\n\
                    Please update logging.level in config.toml."
                )
            }
            ConfigValidationError::ThemeName { name, reason } => {
                format!(
                    "Invalid theme name!\n\n\
                    Your configured value: {name}\n\
                    Reason: {reason}\n\n\
                    Please update theme.name in config.toml."
                )
            }
            ConfigValidationError::EmptyThemesDir => "Themes directory is empty!\n\n\
                Please set theme.themes_dir in config.toml or remove it to use 'themes'."
                .to_string(),
        }
    }
}

/// Result of loading configuration
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
