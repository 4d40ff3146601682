//! Shared error types for the services crate.

use thiserror::Error;

// Re-exported so test doubles outside this crate can construct errors.
pub use reqwest::StatusCode;

/// Errors emitted by `CourseDirectory` implementations.
///
/// The panel treats these opaquely: network, authorization, and
/// malformed-response failures are all one "read failed" category.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error("course directory request failed with status {0}")]
    HttpStatus(StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
