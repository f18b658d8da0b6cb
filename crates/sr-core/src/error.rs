//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, keeping error sites clean while the core stays
//! dependency-free.

use thiserror::Error;

/// The top-level error type for `sr-core` and a common base for sub-crates.
///
/// The domain is total over well-formed input: empty routes, empty catalogs,
/// and non-positive thresholds all have defined outputs.  The only contract
/// violation is a coordinate outside the WGS-84 range or a non-finite value.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): out of WGS-84 range or non-finite")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for all `sr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
