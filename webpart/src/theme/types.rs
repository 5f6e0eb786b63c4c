use host::ThemeSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub author: Option<String>,
}

/// On-disk theme file: metadata plus a table of semantic colors.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThemeFile {
    #[serde(default)]
    pub metadata: ThemeMetadata,
    #[serde(default)]
    pub semantic_colors: BTreeMap<String, toml::Value>,
}

impl ThemeFile {
    /// Convert into a snapshot; non-string values are written through as text.
    pub fn into_loaded(self) -> LoadedTheme {
        let snapshot = self
            .semantic_colors
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    toml::Value::String(text) => text,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        LoadedTheme {
            metadata: self.metadata,
            snapshot,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTheme {
    pub metadata: ThemeMetadata,
    pub snapshot: ThemeSnapshot,
}

/// What happens to style variables whose key is missing from a newer snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleVariablePolicy {
    /// Remove them; the surface shows exactly the latest snapshot.
    #[default]
    Clear,
    /// Keep their last value (last write wins per key).
    Retain,
}

/// `[theme]` section of the configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    themes_dir: Option<String>,
    name: Option<String>,
    #[serde(default)]
    stale_variables: StaleVariablePolicy,
}

impl ThemeConfig {
    pub fn themes_dir(&self) -> &str {
        self.themes_dir.as_deref().unwrap_or("themes")
    }

    /// Theme the demo host starts with; `None` means the host has not
    /// resolved a theme yet.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn stale_variables(&self) -> StaleVariablePolicy {
        self.stale_variables
    }
}
