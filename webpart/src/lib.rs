//! # Section Background Web Part
//!
//! A themed content block that lives inside a hosting page and follows the
//! page theme. The host supplies a theme service; the web part mirrors the
//! active theme's semantic colors onto its root element as CSS custom
//! properties and renders a fixed block of markup with the user's
//! description, escaped.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`theme`] - Theme bridge, style scope and theme files
//! - [`validation`] - Validator trait
//! - [`webpart`] - Web part lifecycle, renderer and property pane

pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod validation;
pub mod webpart;

pub use error::{AppError, AppResult};
pub use theme::{BridgeState, StaleVariablePolicy, ThemeBridge};
pub use validation::Validator;
pub use webpart::{
    ClientSideWebPart, SectionBackgroundWebPart, SurfaceRenderer, WebPartContext,
    WebPartProperties,
};
