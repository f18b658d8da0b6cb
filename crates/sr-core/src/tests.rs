//! Unit tests for sr-core primitives.

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn zero_distance_exact() {
        let p = GeoPoint::new(-12.046, -77.043);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(-12.046, -77.043);
        let b = GeoPoint::new(40.713, -74.006);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111 km everywhere on the sphere.
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn longitude_compresses_toward_poles() {
        // Same longitude delta spans far less ground at 80°N than at the
        // equator — the formula must be spherical, not planar-degree.
        let equator = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        let arctic = GeoPoint::new(80.0, 0.0).distance_m(GeoPoint::new(80.0, 1.0));
        assert!(arctic < equator * 0.25, "arctic {arctic}, equator {equator}");
    }

    #[test]
    fn validate_accepts_range_boundaries() {
        assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
        assert!(GeoPoint::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::new(90.5, 0.0).validate(),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.001).validate(),
            Err(CoreError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).validate().is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).validate().is_err());
    }

    #[test]
    fn display_six_decimals() {
        let p = GeoPoint::new(-12.0, -77.5);
        assert_eq!(p.to_string(), "(-12.000000, -77.500000)");
    }
}

#[cfg(test)]
mod bounds {
    use crate::{GeoBounds, GeoPoint};

    #[test]
    fn empty_iterator_yields_none() {
        assert!(GeoBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn single_point_is_degenerate() {
        let p = GeoPoint::new(1.0, 2.0);
        let b = GeoBounds::from_points([p]).unwrap();
        assert_eq!(b.min_lat, 1.0);
        assert_eq!(b.max_lat, 1.0);
        assert_eq!(b.center(), p);
        assert!(b.contains(p));
    }

    #[test]
    fn extend_and_center() {
        let mut b = GeoBounds::from_point(GeoPoint::new(0.0, 0.0));
        b.extend(GeoPoint::new(2.0, 4.0));
        b.extend(GeoPoint::new(-1.0, 1.0));
        assert_eq!(b.min_lat, -1.0);
        assert_eq!(b.max_lat, 2.0);
        assert_eq!(b.max_lon, 4.0);
        assert_eq!(b.center(), GeoPoint::new(0.5, 2.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = GeoBounds::from_points([GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]).unwrap();
        assert!(b.contains(GeoPoint::new(1.0, 1.0))); // corner
        assert!(b.contains(GeoPoint::new(0.5, 0.5)));
        assert!(!b.contains(GeoPoint::new(1.1, 0.5)));
    }

    #[test]
    fn padded_grows_every_side() {
        let b = GeoBounds::from_point(GeoPoint::new(0.0, 0.0)).padded(0.1);
        assert!(b.contains(GeoPoint::new(0.1, -0.1)));
        assert!(!b.contains(GeoPoint::new(0.2, 0.0)));
    }
}

#[cfg(test)]
mod route {
    use crate::{GeoPoint, Route};

    #[test]
    fn from_pairs_preserves_order() {
        let r = Route::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.points[1], GeoPoint::new(0.0, 1.0));
    }

    #[test]
    fn empty_route_has_no_bounds() {
        let r = Route::default();
        assert!(r.is_empty());
        assert!(r.bounds().is_none());
        assert_eq!(r.length_m(), 0.0);
    }

    #[test]
    fn single_point_route_has_zero_length() {
        let r = Route::from_pairs(&[(0.0, 0.0)]);
        assert_eq!(r.length_m(), 0.0);
        assert!(r.bounds().is_some());
    }

    #[test]
    fn length_sums_segments() {
        // Two equal equatorial segments: total is twice one segment.
        let r = Route::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);
        let one = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        assert!((r.length_m() - 2.0 * one).abs() < 1e-6);
    }

    #[test]
    fn validate_flags_any_bad_waypoint() {
        let good = Route::from_pairs(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(good.validate().is_ok());

        let bad = Route::from_pairs(&[(0.0, 0.0), (91.0, 0.0)]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn bounds_cover_all_waypoints() {
        let r = Route::from_pairs(&[(0.0, 0.0), (2.0, -1.0), (1.0, 3.0)]);
        let b = r.bounds().unwrap();
        for p in r.iter() {
            assert!(b.contains(p));
        }
    }
}

#[cfg(test)]
mod ids {
    use crate::{HazardId, TipId};

    #[test]
    fn index_cast() {
        assert_eq!(HazardId(42).index(), 42);
        assert_eq!(TipId(3).index(), 3);
    }

    #[test]
    fn ordering() {
        assert!(HazardId(0) < HazardId(1));
        assert!(TipId(100) > TipId(99));
    }

    #[test]
    fn display() {
        assert_eq!(HazardId(7).to_string(), "HazardId(7)");
        assert_eq!(TipId(2).to_string(), "TipId(2)");
    }
}

#[cfg(test)]
mod rng {
    use crate::TripRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TripRng::new(12345);
        let mut r2 = TripRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = TripRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = TripRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = TripRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = TripRng::new(7);
        let mut v: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u32>>());
    }
}
