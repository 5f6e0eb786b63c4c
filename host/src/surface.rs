use crate::markup::{Markup, escape};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Custom style properties written onto a surface, `--name -> value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleVariables(BTreeMap<String, String>);

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleVariables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Root element a component renders into.
///
/// Style variables and content are independent concerns of the same
/// element: replacing the content keeps the variables, and writing variables
/// never touches the content.
pub trait Surface: Send + Sync {
    /// Set every variable in `variables`, leaving other variables as they are.
    fn set_style_variables(&self, variables: &StyleVariables);

    fn remove_style_variables(&self, names: &[String]);

    /// Replace the element's content.
    fn set_content(&self, markup: &Markup);
}

/// In-memory root element used by hosts without a real DOM.
pub struct DomElement {
    id: String,
    style: Mutex<StyleVariables>,
    content: Mutex<Markup>,
    content_writes: AtomicUsize,
}

fn lock<T>(value: &Mutex<T>) -> MutexGuard<'_, T> {
    value.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DomElement {
    /// Element with a generated id.
    pub fn new() -> Self {
        Self::with_id(format!("surface-{}", Uuid::new_v4().simple()))
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: Mutex::new(StyleVariables::new()),
            content: Mutex::new(Markup::new()),
            content_writes: AtomicUsize::new(0),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        lock(&self.style).get(name).map(str::to_string)
    }

    pub fn style_variables(&self) -> StyleVariables {
        lock(&self.style).clone()
    }

    pub fn inner_html(&self) -> String {
        lock(&self.content).as_str().to_string()
    }

    /// How many times the content has been replaced.
    pub fn content_writes(&self) -> usize {
        self.content_writes.load(Ordering::Relaxed)
    }

    /// Serialize the element with its inline style and content.
    pub fn outer_html(&self) -> String {
        let style = lock(&self.style)
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");

        let mut html = String::new();
        let _ = write!(html, "<div id=\"{}\"", escape(&self.id));
        if !style.is_empty() {
            let _ = write!(html, " style=\"{}\"", escape(&style));
        }
        let _ = write!(html, ">{}</div>", lock(&self.content));
        html
    }
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DomElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomElement")
            .field("id", &self.id)
            .field("style", &*lock(&self.style))
            .field("content_writes", &self.content_writes())
            .finish()
    }
}

impl Surface for DomElement {
    fn set_style_variables(&self, variables: &StyleVariables) {
        let mut style = lock(&self.style);
        for (name, value) in variables.iter() {
            style.insert(name, value);
        }
    }

    fn remove_style_variables(&self, names: &[String]) {
        let mut style = lock(&self.style);
        for name in names {
            style.remove(name);
        }
    }

    fn set_content(&self, markup: &Markup) {
        *lock(&self.content) = markup.clone();
        self.content_writes.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables(entries: &[(&str, &str)]) -> StyleVariables {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_set_style_variables_merges() {
        let element = DomElement::with_id("root");
        element.set_style_variables(&variables(&[("--a", "1"), ("--b", "2")]));
        element.set_style_variables(&variables(&[("--b", "3")]));

        assert_eq!(element.style_property("--a").as_deref(), Some("1"));
        assert_eq!(element.style_property("--b").as_deref(), Some("3"));
    }

    #[test]
    fn test_remove_style_variables() {
        let element = DomElement::with_id("root");
        element.set_style_variables(&variables(&[("--a", "1"), ("--b", "2")]));
        element.remove_style_variables(&["--a".to_string(), "--missing".to_string()]);

        assert_eq!(element.style_variables(), variables(&[("--b", "2")]));
    }

    #[test]
    fn test_content_and_style_are_independent() {
        let element = DomElement::with_id("root");
        element.set_style_variables(&variables(&[("--bodyText", "red")]));

        let mut markup = Markup::new();
        markup.push_template("<p>hi</p>");
        element.set_content(&markup);
        element.set_content(&markup);

        assert_eq!(element.style_property("--bodyText").as_deref(), Some("red"));
        assert_eq!(element.inner_html(), "<p>hi</p>");
        assert_eq!(element.content_writes(), 2);
    }

    #[test]
    fn test_outer_html_escapes_style_attribute() {
        let element = DomElement::with_id("root");
        element.set_style_variables(&variables(&[("--font", "\"Segoe UI\"")]));

        assert_eq!(
            element.outer_html(),
            "<div id=\"root\" style=\"--font: &quot;Segoe UI&quot;\"></div>"
        );
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(DomElement::new().id(), DomElement::new().id());
    }
}
