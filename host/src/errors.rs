use thiserror::Error;

/// Errors raised by host-side capabilities.
///
/// Missing services and absent themes are not errors; they surface as `None`
/// from [`ServiceScope::consume`](crate::ServiceScope::consume) and
/// [`ThemeService::try_get_theme`](crate::ThemeService::try_get_theme).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A service was already registered under this key in the scope.
    #[error("Service '{key}' is already registered in this scope")]
    ServiceAlreadyRegistered { key: &'static str },
}

/// Result type alias for host operations
pub type HostResult<T> = Result<T, HostError>;
