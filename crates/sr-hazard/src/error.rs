//! Hazard-subsystem error type.

use thiserror::Error;

use sr_core::CoreError;

/// Errors produced by `sr-hazard`.
#[derive(Debug, Error)]
pub enum HazardError {
    /// An out-of-range or non-finite coordinate reached a boundary
    /// (catalog load or matcher entry).
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HazardResult<T> = Result<T, HazardError>;
