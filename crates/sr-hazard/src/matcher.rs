//! Route danger-proximity matching.
//!
//! Classifies each catalog hazard as near or far relative to a route: a
//! hazard is a match when its minimum great-circle distance to any route
//! waypoint is within the threshold.  The computation is a pure function of
//! its inputs — no I/O, no retained state, invoked anew each time the caller
//! obtains a fresh route.
//!
//! # Cost
//!
//! `LinearMatcher` is the brute-force all-pairs minimum:
//! `O(|catalog| × |route|)` distance evaluations.  Routes and catalogs in
//! this domain are tens to low hundreds of points, so the scan completes in
//! microseconds; a spatially indexed implementation can be slotted in behind
//! [`HazardMatcher`] without changing observable results.

use sr_core::{GeoPoint, Route};

use crate::catalog::HazardCatalog;
use crate::HazardResult;

/// The application's default matching threshold in metres.
///
/// A business parameter, not an algorithmic one — every matching call takes
/// the threshold explicitly, and callers with different risk posture pass
/// their own.
pub const DEFAULT_THRESHOLD_M: f64 = 500.0;

// ── HazardMatcher trait ───────────────────────────────────────────────────────

/// Pluggable proximity classifier.
///
/// Implement this trait to replace the default linear scan with a spatially
/// indexed variant if catalogs ever grow beyond the point-count assumptions
/// above.  Implementations must be observably equivalent: same membership,
/// same catalog-order output.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the catalog is read-only and one
/// matcher may serve concurrent route updates.
pub trait HazardMatcher: Send + Sync {
    /// Hazards within `threshold_m` metres of `route`, in catalog order.
    ///
    /// Defined edge cases (none are errors):
    /// - empty route ⇒ empty result (no route means nothing is "on" it);
    /// - empty catalog ⇒ empty result;
    /// - `threshold_m <= 0.0` is legal — a negative threshold matches
    ///   nothing, not even a hazard at distance exactly 0.
    ///
    /// The boundary is inclusive: a hazard at exactly `threshold_m` matches.
    ///
    /// # Errors
    ///
    /// `HazardError::Core` if any route waypoint is out of range or
    /// non-finite.  Catalog points were validated at load.
    fn matches(
        &self,
        route: &Route,
        catalog: &HazardCatalog,
        threshold_m: f64,
    ) -> HazardResult<Vec<GeoPoint>>;
}

// ── LinearMatcher ─────────────────────────────────────────────────────────────

/// Exhaustive per-hazard minimum-distance scan — the reference
/// implementation of the matching contract.
pub struct LinearMatcher;

impl HazardMatcher for LinearMatcher {
    fn matches(
        &self,
        route: &Route,
        catalog: &HazardCatalog,
        threshold_m: f64,
    ) -> HazardResult<Vec<GeoPoint>> {
        route.validate()?;

        if route.is_empty() {
            return Ok(Vec::new());
        }

        let matched: Vec<GeoPoint> = catalog
            .points()
            .iter()
            .copied()
            .filter(|&hazard| {
                // min over a non-empty route; the empty case returned above.
                let min = route
                    .iter()
                    .map(|waypoint| hazard.distance_m(waypoint))
                    .fold(f64::INFINITY, f64::min);
                min <= threshold_m
            })
            .collect();

        log::debug!(
            "matched {} of {} hazards within {threshold_m} m of a {}-point route",
            matched.len(),
            catalog.len(),
            route.len(),
        );

        Ok(matched)
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Hazards within `threshold_m` metres of `route`, in catalog order.
///
/// Free-function convenience over [`LinearMatcher`]; see
/// [`HazardMatcher::matches`] for the full contract.
pub fn hazards_near_route(
    route: &Route,
    catalog: &HazardCatalog,
    threshold_m: f64,
) -> HazardResult<Vec<GeoPoint>> {
    LinearMatcher.matches(route, catalog, threshold_m)
}

/// Minimum great-circle distance from `point` to any waypoint of `route`,
/// or `None` for an empty route.
///
/// Exposed for collaborators that need the raw distance (e.g. "how far is
/// the nearest route point from here"); the matcher itself only needs the
/// threshold comparison.
pub fn min_distance_to_route_m(route: &Route, point: GeoPoint) -> Option<f64> {
    route
        .iter()
        .map(|waypoint| point.distance_m(waypoint))
        .fold(None, |best, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}
