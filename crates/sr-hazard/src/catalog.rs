//! Hazard catalog: the load-time-fixed set of known danger locations.
//!
//! # Lifecycle
//!
//! A catalog is built once at process start (from in-memory points or a CSV
//! source) and never mutated afterwards.  Every point is validated at
//! construction, so downstream consumers may compute distances without
//! re-checking.  Duplicate coordinates are kept: each catalog entry is
//! evaluated and reported independently by the matcher.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the catalog points backs the
//! [`nearest`](HazardCatalog::nearest) / [`k_nearest`](HazardCatalog::k_nearest)
//! queries used by collaborators ("closest danger to my position").  The
//! proximity matcher does not consult it — the exhaustive scan is the defined
//! algorithm, and the index exists only for point queries.
//!
//! # CSV format
//!
//! One row per hazard:
//!
//! ```csv
//! lat,lon
//! -12.0453,-77.0311
//! -12.0501,-77.0428
//! ```

use std::io::Read;
use std::path::Path;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use serde::Deserialize;

use sr_core::{GeoPoint, HazardId};

use crate::{HazardError, HazardResult};

// ── R-tree hazard entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `HazardId`.
#[derive(Clone)]
struct HazardEntry {
    point: [f64; 2], // [lat, lon]
    id: HazardId,
}

impl RTreeObject for HazardEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HazardEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-hazard ranking within a city; metric distances come from
    /// `GeoPoint::distance_m` once a candidate is selected.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HazardRecord {
    lat: f64,
    lon: f64,
}

// ── HazardCatalog ─────────────────────────────────────────────────────────────

/// Immutable set of known danger coordinates, in load order.
///
/// `HazardId(n)` addresses the `n`-th loaded point.  The catalog is
/// `Send + Sync` by construction and safe to share across threads; matching
/// never mutates it.
pub struct HazardCatalog {
    points: Vec<GeoPoint>,
    spatial_idx: RTree<HazardEntry>,
}

impl HazardCatalog {
    /// Build a catalog from validated points.
    ///
    /// # Errors
    ///
    /// `HazardError::Core` if any point is out of range or non-finite —
    /// a catalog never holds a coordinate the distance formula can't trust.
    pub fn from_points(points: Vec<GeoPoint>) -> HazardResult<Self> {
        for p in &points {
            p.validate()?;
        }

        // Bulk-load the R-tree (faster than N inserts).
        let entries: Vec<HazardEntry> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| HazardEntry {
                point: [p.lat, p.lon],
                id: HazardId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(Self { points, spatial_idx })
    }

    /// Build from `(lat, lon)` pairs — the shape embedded catalogs use.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> HazardResult<Self> {
        Self::from_points(pairs.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect())
    }

    /// Load a catalog from a `lat,lon` CSV file.
    pub fn from_csv_path(path: &Path) -> HazardResult<Self> {
        let file = std::fs::File::open(path).map_err(HazardError::Io)?;
        Self::from_csv_reader(file)
    }

    /// Like [`from_csv_path`](Self::from_csv_path) but accepts any `Read`
    /// source.  Useful for testing (pass a `std::io::Cursor`) or loading
    /// from an embedded constant.
    pub fn from_csv_reader<R: Read>(reader: R) -> HazardResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut points = Vec::new();

        for result in csv_reader.deserialize::<HazardRecord>() {
            let row = result.map_err(|e| HazardError::Parse(e.to_string()))?;
            points.push(GeoPoint::new(row.lat, row.lon));
        }

        Self::from_points(points)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of a hazard, or `None` for an out-of-range id.
    pub fn get(&self, id: HazardId) -> Option<GeoPoint> {
        self.points.get(id.index()).copied()
    }

    /// All hazard points in catalog order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Iterate hazards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (HazardId, GeoPoint)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (HazardId(i as u32), p))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The hazard nearest to `pos`.
    ///
    /// Returns `None` only if the catalog is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<HazardId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Up to `k` nearest hazards to `pos`, sorted by ascending distance.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<HazardId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}
