//! `sr-core` — foundational types for the `saferoute` toolkit.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance, `GeoBounds`           |
//! | [`route`]   | `Route` — the polyline an external router returns     |
//! | [`ids`]     | `HazardId`, `TipId`                                   |
//! | [`rng`]     | `TripRng` (seeded, deterministic)                     |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoBounds, GeoPoint};
pub use ids::{HazardId, TipId};
pub use rng::TripRng;
pub use route::Route;
