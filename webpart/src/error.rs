use std::fmt::Display;

/// Error types for the section background web part.
///
/// Most of the theme lifecycle is deliberately error free: a missing theme
/// service or an unresolved theme are ordinary states. Errors are reserved
/// for misuse of the component lifecycle, bad configuration and theme files
/// that cannot be read.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Theme`] - Theme file lookup, validation and parsing errors
/// - [`State`] - Lifecycle calls made out of order
/// - [`Component`] - Property pane and rendering errors
/// - [`Host`] - Failures reported by host capabilities
///
/// # Examples
///
/// ```no_run
/// use section_background::error::{AppError, AppResult};
///
/// fn check_ready(initialized: bool) -> AppResult<()> {
///     if !initialized {
///         return Err(AppError::State("render() called before on_init()".to_string()));
///     }
///     Ok(())
/// }
///
/// match check_ready(false) {
///     Err(AppError::State(msg)) => log::warn!("{msg}"),
///     Err(other) => log::error!("{other}"),
///     Ok(()) => {}
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Theme`]: AppError::Theme
/// [`State`]: AppError::State
/// [`Component`]: AppError::Component
/// [`Host`]: AppError::Host
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// # Recovery
    /// - Fall back to default configuration
    /// - Report every validation problem at once
    Config(String),

    /// Theme file errors: invalid names, paths outside the themes directory,
    /// unreadable or unparsable files.
    Theme(String),

    /// Lifecycle methods called in the wrong order, such as rendering before
    /// initialization has completed.
    State(String),

    /// Property pane and rendering errors.
    Component(String),

    /// Errors reported by host capabilities.
    Host(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::Host(msg) => write!(f, "Host Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<host::HostError> for AppError {
    fn from(err: host::HostError) -> Self {
        AppError::Host(err.to_string())
    }
}

/// Result type alias for web part operations
pub type AppResult<T> = Result<T, AppError>;
