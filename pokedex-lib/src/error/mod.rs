//! Error types

mod api;

pub use api::*;

/// Top-level error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the underlying API call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An exact-match lookup found nothing.
    #[error("No match found for '{resource}'")]
    NotFound {
        /// The name that was looked up.
        resource: String,
    },
}

impl Error {
    /// Creates a not-found error for the given resource name.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Returns `true` if this error is an exact-match miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
