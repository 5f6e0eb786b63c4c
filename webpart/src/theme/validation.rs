use crate::error::AppError;
use crate::validation::Validator;
use std::path::{Path, PathBuf};

const MAX_THEME_NAME_LEN: usize = 50;

/// Validation errors specific to theme files
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    InvalidThemeName { name: String, reason: String },
    InvalidThemePath { path: String, reason: String },
    InvalidFileExtension { path: String, expected: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Please use valid theme names (alphanumeric, hyphens, underscores only)."
                )
            }
            ThemeValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the theme file exists inside the themes directory."
                )
            }
            ThemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files"
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Validator for theme names
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidThemeName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.len() > MAX_THEME_NAME_LEN {
            return Err(invalid("Name too long (max 50 characters)"));
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid(
                "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)",
            ));
        }

        if input.starts_with(['-', '_']) || input.ends_with(['-', '_']) {
            return Err(invalid("Name cannot start or end with hyphens or underscores"));
        }

        Ok(())
    }
}

/// Validator for theme file paths, relative to the themes directory
pub struct ThemePathValidator<'a> {
    pub themes_dir: &'a Path,
}

impl Validator<PathBuf> for ThemePathValidator<'_> {
    type Error = ThemeValidationError;

    fn validate(&self, input: &PathBuf) -> Result<(), Self::Error> {
        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: "toml".to_string(),
            });
        }

        if !input.is_file() {
            return Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path does not exist or is not a file".to_string(),
            });
        }

        // Symlinks may not lead out of the themes directory.
        let resolved = input.canonicalize().ok();
        let root = self.themes_dir.canonicalize().ok();
        match (resolved, root) {
            (Some(resolved), Some(root)) if resolved.starts_with(&root) => Ok(()),
            _ => Err(ThemeValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path is outside the themes directory".to_string(),
            }),
        }
    }
}
