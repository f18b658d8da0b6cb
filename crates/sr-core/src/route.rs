//! The route polyline.
//!
//! A `Route` is produced fresh by an external routing service for each
//! origin/destination request and is only ever read downstream: the matcher
//! consumes it, the rendering layer draws it, nothing mutates or retains it
//! past the call.  May be empty (no route computed yet) or a single point
//! (degenerate).

use crate::geo::{GeoBounds, GeoPoint};
use crate::CoreResult;

/// An ordered polyline from origin to destination.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Waypoints in travel order.
    pub points: Vec<GeoPoint>,
}

impl Route {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Build from the `(lat, lon)` pair shape routing services return.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.points.iter().copied()
    }

    /// Validate every waypoint.  Routes arrive from the network per request,
    /// so this runs at each consumption boundary rather than once at load.
    pub fn validate(&self) -> CoreResult<()> {
        for p in &self.points {
            p.validate()?;
        }
        Ok(())
    }

    /// Bounding box of the polyline; `None` for an empty route.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.iter())
    }

    /// Total polyline length in metres: the sum of consecutive great-circle
    /// segments.  0 for empty and single-point routes.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }
}

impl From<Vec<GeoPoint>> for Route {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}
