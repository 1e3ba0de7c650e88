use thiserror::Error;

/// Reasons a navigation request could not be handed to the router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No router is mounted above the calling component
    #[error("router is not available in this scope")]
    Unavailable,
    /// No route matches the target path
    #[error("no route matches navigation target: {0}")]
    UnknownRoute(String),
    /// The router refused the navigation
    #[error("router rejected navigation: {0}")]
    Rejected(String),
}

/// Result type for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
