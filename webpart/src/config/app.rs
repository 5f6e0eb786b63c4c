use super::LoggingConfig;
use super::validation::ConfigValidationError;
use crate::theme::types::ThemeConfig;
use crate::theme::validation::{ThemeNameValidator, ThemeValidationError};
use crate::validation::Validator;
use crate::webpart::WebPartProperties;
use serde::Deserialize;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    webpart: WebPartProperties,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                level: self.logging.level().to_string(),
            });
        }

        if let Some(name) = self.theme.name() {
            if let Err(ThemeValidationError::InvalidThemeName { name, reason }) =
                ThemeNameValidator.validate(name)
            {
                errors.push(ConfigValidationError::ThemeName { name, reason });
            }
        }

        if self.theme.themes_dir().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyThemesDir);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn webpart(&self) -> &WebPartProperties {
        &self.webpart
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}
