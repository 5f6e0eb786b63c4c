use crate::error::{AppError, AppResult};
use crate::theme::defaults::{BUILTIN_THEMES, builtin_theme};
use crate::theme::types::{LoadedTheme, ThemeFile};
use crate::theme::validation::{ThemeNameValidator, ThemePathValidator};
use crate::validation::Validator;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads theme files from a directory, falling back to the built-in themes.
///
/// A file in the themes directory shadows a built-in theme of the same name.
pub struct ThemeLoader {
    themes_dir: PathBuf,
    theme_name_validator: ThemeNameValidator,
}

impl ThemeLoader {
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            theme_name_validator: ThemeNameValidator,
        }
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    pub fn load_theme(&self, theme_name: &str) -> AppResult<LoadedTheme> {
        self.theme_name_validator.validate(theme_name)?;

        let theme_path = self.themes_dir.join(format!("{theme_name}.toml"));
        let (content, origin) = if theme_path.exists() {
            ThemePathValidator {
                themes_dir: &self.themes_dir,
            }
            .validate(&theme_path)?;

            let content = fs::read_to_string(&theme_path).map_err(|e| {
                AppError::Theme(format!(
                    "Failed to read theme file '{}': {e}",
                    theme_path.display()
                ))
            })?;
            (content, theme_path.display().to_string())
        } else if let Some(content) = builtin_theme(theme_name) {
            log::debug!("Using built-in theme '{theme_name}'");
            (content.to_string(), format!("built-in:{theme_name}"))
        } else {
            return Err(AppError::Theme(format!(
                "Theme '{theme_name}' not found in '{}' or among the built-in themes",
                self.themes_dir.display()
            )));
        };

        let file: ThemeFile = toml::from_str(&content)
            .map_err(|e| AppError::Theme(format!("Failed to parse theme file '{origin}': {e}")))?;

        let mut theme = file.into_loaded();
        if theme.metadata.name.is_empty() {
            theme.metadata.name = theme_name.to_string();
        }

        log::info!(
            "Loaded theme '{}' from {origin} ({} semantic colors)",
            theme.metadata.name,
            theme.snapshot.len()
        );
        Ok(theme)
    }

    /// Names of every loadable theme, sorted.
    pub fn discover_themes(&self) -> AppResult<Vec<String>> {
        let mut themes: Vec<String> = BUILTIN_THEMES
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();

        if self.themes_dir.is_dir() {
            let entries = fs::read_dir(&self.themes_dir).map_err(|e| {
                AppError::Theme(format!(
                    "Failed to read themes directory '{}': {e}",
                    self.themes_dir.display()
                ))
            })?;

            for entry in entries {
                let entry = entry
                    .map_err(|e| AppError::Theme(format!("Failed to read directory entry: {e}")))?;

                let path = entry.path();
                if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml") {
                    if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                        if self.theme_name_validator.validate(name).is_ok() {
                            themes.push(name.to_string());
                        }
                    }
                }
            }
        }

        themes.sort();
        themes.dedup();
        Ok(themes)
    }
}
