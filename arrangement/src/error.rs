//! Widget error types.

use thiserror::Error;

/// Errors raised while attaching an [`Arrangement`](crate::Arrangement) to a
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrangeError {
    /// No element with the configured container id exists in the document.
    #[error("container element '#{0}' not found")]
    ContainerNotFound(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ArrangeError>;
