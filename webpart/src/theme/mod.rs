//! # Theme Module
//!
//! Keeps the web part's look in step with the host page theme. The host owns
//! the active theme; this module mirrors it onto the component's surface as
//! CSS custom properties, one per semantic color (`--bodyText`,
//! `--bodyBackground`, ...), and leaves the actual coloring to stylesheet
//! rules that read those properties.
//!
//! ## Architecture
//!
//! - **[`ThemeBridge`]** - Acquires the theme service, captures the current
//!   theme, subscribes to changes and owns that subscription
//! - **[`StyleScope`]** - Projection of a theme snapshot into style variables
//! - **[`ThemeLoader`]** - Theme files for hosts that serve themes from disk
//! - **Theme Validation** - Name and path checks for theme files
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --initialize()--> AwaitingTheme --snapshot applied--> Themed
//! ```
//!
//! A theme change only rewrites style variables. Markup is never re-rendered
//! because of a theme change.
//!
//! ## Stale variables
//!
//! When a newer snapshot lacks keys an older one had, [`StaleVariablePolicy`]
//! decides the outcome: `Clear` (default) removes the orphaned variables,
//! `Retain` keeps their last value.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use host::{DomElement, ServiceScope};
//! use section_background::theme::{StaleVariablePolicy, ThemeBridge};
//!
//! let scope = ServiceScope::new();
//! let element = Arc::new(DomElement::new());
//! let mut bridge = ThemeBridge::new(element, StaleVariablePolicy::Clear);
//! bridge.initialize(&scope);
//! ```

pub mod bridge;
pub mod defaults;
pub mod loader;
pub mod style_scope;
pub mod types;
pub mod validation;

pub use bridge::{BridgeState, ThemeApplier, ThemeBridge};
pub use loader::ThemeLoader;
pub use style_scope::{StyleScope, StyleUpdate, variable_name};
pub use types::{LoadedTheme, StaleVariablePolicy, ThemeConfig, ThemeMetadata};
