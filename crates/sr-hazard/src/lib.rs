//! `sr-hazard` — hazard catalog and route danger-proximity matching.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`catalog`] | `HazardCatalog` (point set + R-tree), CSV loading           |
//! | [`matcher`] | `HazardMatcher` trait, `LinearMatcher`, `hazards_near_route`|
//! | [`error`]   | `HazardError`, `HazardResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod catalog;
pub mod error;
pub mod matcher;


pub use catalog::HazardCatalog;
pub use error::{HazardError, HazardResult};
pub use matcher::{
    hazards_near_route, min_distance_to_route_m, HazardMatcher, LinearMatcher,
    DEFAULT_THRESHOLD_M,
};
