use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic colors of the active theme at one point in time.
///
/// Maps a semantic color name such as `bodyText` to a color value such as
/// `#323130`. A snapshot is never mutated after construction; a theme change
/// produces a new snapshot.
///
/// Values are not validated. Whatever the theme source provides is passed
/// through to the styling layer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSnapshot {
    colors: BTreeMap<String, String>,
}

impl ThemeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries.into_iter().collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.colors.contains_key(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ThemeSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_from_entries_keeps_values() {
        let snapshot =
            ThemeSnapshot::from_entries([("bodyText", "#323130"), ("bodyBackground", "#ffffff")]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("bodyText"), Some("#323130"));
        assert_eq!(
            snapshot.keys().collect::<Vec<_>>(),
            vec!["bodyBackground", "bodyText"]
        );
    }

    #[test]
    fn test_serde_is_a_plain_map() {
        let snapshot = ThemeSnapshot::from_entries([("link", "#0078d4")]);
        let text = assert_ok!(serde_json::to_string(&snapshot));
        assert_eq!(text, r##"{"link":"#0078d4"}"##);

        let parsed: ThemeSnapshot = assert_ok!(serde_json::from_str(&text));
        assert_eq!(parsed, snapshot);
    }
}
