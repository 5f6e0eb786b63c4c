use crate::theme::types::StaleVariablePolicy;
use host::{StyleVariables, ThemeSnapshot};

/// Prefix that turns a semantic color name into a custom property name.
pub const STYLE_VARIABLE_PREFIX: &str = "--";

/// `bodyText` -> `--bodyText`
pub fn variable_name(key: &str) -> String {
    format!("{STYLE_VARIABLE_PREFIX}{key}")
}

/// Writes needed to bring a surface in line with a new snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleUpdate {
    pub set: StyleVariables,
    pub removed: Vec<String>,
}

/// Custom style properties the component has written onto its surface.
///
/// Every applied snapshot is projected in full. Whether variables of keys
/// that disappeared from a newer snapshot survive is decided by the
/// [`StaleVariablePolicy`] passed to [`apply`](Self::apply).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleScope {
    variables: StyleVariables,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `--<key>` variable per snapshot entry, values unchanged.
    pub fn project(snapshot: &ThemeSnapshot) -> StyleVariables {
        snapshot
            .iter()
            .map(|(key, value)| (variable_name(key), value))
            .collect()
    }

    /// Record `snapshot` and return the surface writes it requires.
    pub fn apply(&mut self, snapshot: &ThemeSnapshot, policy: StaleVariablePolicy) -> StyleUpdate {
        let set = Self::project(snapshot);

        let removed: Vec<String> = match policy {
            StaleVariablePolicy::Clear => self
                .variables
                .names()
                .filter(|name| !set.contains(name))
                .map(str::to_string)
                .collect(),
            StaleVariablePolicy::Retain => Vec::new(),
        };

        for name in &removed {
            self.variables.remove(name);
        }
        for (name, value) in set.iter() {
            self.variables.insert(name, value);
        }

        StyleUpdate { set, removed }
    }

    /// Value of the variable for semantic color `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(&variable_name(key))
    }

    pub fn variables(&self) -> &StyleVariables {
        &self.variables
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
