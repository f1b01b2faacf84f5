//! Error types for the natsort crate.

use thiserror::Error;

/// Errors that can occur when configuring a comparator.
///
/// Comparisons themselves never fail; only parsing configuration can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NatsortError {
    /// Sort direction text was neither `ASC` nor `DESC`.
    #[error("invalid sort direction '{0}': expected ASC or DESC")]
    InvalidDirection(String),
}

/// Result type for natsort operations.
pub type Result<T> = std::result::Result<T, NatsortError>;
