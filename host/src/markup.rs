//! HTML escaping and typed markup.
//!
//! [`Markup`] only grows through two doors: `&'static str` template
//! fragments written into the program, and [`Escaped`] text. Runtime strings
//! therefore cannot reach a surface without passing through [`escape`].

use std::fmt;

/// Replace the HTML-special characters `& < > " '` with entities.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Text that has been HTML-escaped and is safe to embed in markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Escaped(String);

impl Escaped {
    pub fn new(raw: &str) -> Self {
        Self(escape(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A markup fragment ready to be written into a surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment of the compiled-in template.
    pub fn push_template(&mut self, fragment: &'static str) -> &mut Self {
        self.0.push_str(fragment);
        self
    }

    pub fn push_escaped(&mut self, text: &Escaped) -> &mut Self {
        self.0.push_str(text.as_str());
        self
    }

    /// Escape `raw` and append it.
    pub fn push_text(&mut self, raw: &str) -> &mut Self {
        self.push_escaped(&Escaped::new(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
