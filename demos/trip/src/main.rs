//! trip — end-to-end demo for the saferoute toolkit.
//!
//! Loads a hazard catalog from an embedded CSV, matches it against a walking
//! route through central Lima, and prints what the host application would
//! hand to its collaborators: the hazard overlay list (as JSON), the camera
//! bounds, and two trip-start advisory tips.
//!
//! Run with `RUST_LOG=debug` to see the matcher's per-run summary.

mod route_data;

use std::io::Cursor;

use anyhow::Result;

use sr_advisory::TipRegistry;
use sr_core::TripRng;
use sr_hazard::{hazards_near_route, min_distance_to_route_m, HazardCatalog, DEFAULT_THRESHOLD_M};

use route_data::demo_route;

// ── Constants ─────────────────────────────────────────────────────────────────

const THRESHOLD_M: f64 = DEFAULT_THRESHOLD_M;
const TIP_COUNT: usize = 2;
const SEED: u64 = 42;

// ── Hazard catalog CSV ────────────────────────────────────────────────────────

// Known danger locations around the demo route.  Rows 1–4 and 8 lie within
// 500 m of the polyline; rows 5–7 are kilometres away.
const HAZARD_CSV: &str = "\
lat,lon\n\
-12.0509,-77.0362\n\
-12.0490,-77.0345\n\
-12.0466,-77.0306\n\
-12.0435,-77.0275\n\
-12.0600,-77.0400\n\
-12.1200,-77.0300\n\
-11.9900,-77.0600\n\
-12.0464,-77.0301\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== trip — saferoute demo ===");
    println!("Threshold: {THRESHOLD_M} m  |  Seed: {SEED}");
    println!();

    // 1. Load the hazard catalog (embedded CSV; the application loads the
    //    same shape from its bundled data).
    let catalog = HazardCatalog::from_csv_reader(Cursor::new(HAZARD_CSV))?;
    println!("Hazard catalog: {} points", catalog.len());

    // 2. The route, as the external routing service returned it.
    let route = demo_route();
    println!(
        "Route: {} waypoints, {:.0} m end to end",
        route.len(),
        route.length_m()
    );
    println!();

    // 3. Match hazards against the route.
    let matches = hazards_near_route(&route, &catalog, THRESHOLD_M)?;
    println!(
        "{} of {} hazards within {THRESHOLD_M} m of the route",
        matches.len(),
        catalog.len()
    );
    println!();

    // 4. Match table.
    println!("{:<6} {:<14} {:<14} {:>10}", "#", "Lat", "Lon", "Dist (m)");
    println!("{}", "-".repeat(48));
    for (i, hazard) in matches.iter().enumerate() {
        let dist = min_distance_to_route_m(&route, *hazard).unwrap_or(f64::INFINITY);
        println!(
            "{:<6} {:<14.6} {:<14.6} {:>10.1}",
            i, hazard.lat, hazard.lon, dist
        );
    }
    println!();

    // 5. The rendering-layer contract: a list of coordinates to highlight.
    println!("Overlay JSON: {}", serde_json::to_string(&matches)?);
    println!();

    // 6. Camera framing for the map view.
    if let Some(bounds) = route.bounds() {
        let framed = bounds.padded(0.002);
        println!(
            "Camera bounds: ({:.4}, {:.4}) – ({:.4}, {:.4}), centred on {}",
            framed.min_lat,
            framed.min_lon,
            framed.max_lat,
            framed.max_lon,
            framed.center()
        );
    }
    println!();

    // 7. Trip-start advisories.
    let registry = TipRegistry::built_in();
    let mut rng = TripRng::new(SEED);
    println!("Before you go:");
    for tip in registry.pick_texts(TIP_COUNT, &mut rng) {
        println!("  - {tip}");
    }

    Ok(())
}
