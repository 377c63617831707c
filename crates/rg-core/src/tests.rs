//! Unit tests for rg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{JunctionId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = RoadId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoadId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn wire_sentinel() {
        assert_eq!(RoadId::to_wire(None), -1);
        assert_eq!(RoadId::to_wire(Some(RoadId(7))), 7);
    }

    #[test]
    fn display() {
        assert_eq!(RoadId(7).to_string(), "RoadId(7)");
        assert_eq!(JunctionId(3).to_string(), "JunctionId(3)");
    }
}

#[cfg(test)]
mod geo {
    use std::collections::HashSet;

    use crate::{Coordinate, haversine_km, project_to_metric};

    #[test]
    fn equality_ignores_offsets() {
        let a = Coordinate::new(48.137, 11.575);
        let mut b = a;
        b.dist_lat = 123.0;
        b.dist_long = 456.0;
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_bit_exact() {
        let a = Coordinate::new(48.137, 11.575);
        let b = Coordinate::new(48.137, f64::from_bits(11.575f64.to_bits() + 1));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_consistent_with_eq() {
        let mut set = HashSet::new();
        let a = Coordinate::new(1.0, 2.0);
        let mut b = a;
        b.dist_lat = 99.0;
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.insert(b));
    }

    #[test]
    fn precedes_breaks_ties_on_long() {
        let a = Coordinate::new(2.0, 0.0);
        let b = Coordinate::new(2.0, 3.0);
        let c = Coordinate::new(1.0, 9.0);
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
        assert!(c.precedes(&a));
        assert!(!a.precedes(&a));
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let d = haversine_km((30.0, 0.0), (31.0, 0.0));
        assert!((d - 111.195).abs() < 0.05, "got {d}");
    }

    #[test]
    fn reference_projects_to_origin() {
        let r = Coordinate::new(48.1, 11.5);
        assert_eq!(project_to_metric(&r, &r), (0.0, 0.0));
    }

    #[test]
    fn offsets_are_per_axis() {
        let r = Coordinate::new(48.0, 11.0);
        let mut c = Coordinate::new(48.0, 11.01);
        c.compute_offsets(&r);
        assert_eq!(c.dist_lat, 0.0);
        // Longitude distance is measured on the equator, not at 48°N.
        let expected = haversine_km((0.0, 11.0), (0.0, 11.01)) * 1_000.0;
        assert_eq!(c.dist_long, expected);
        assert!((c.dist_long - 1_111.95).abs() < 1.0, "got {}", c.dist_long);
    }

    #[test]
    fn offsets_are_unsigned() {
        let r = Coordinate::new(48.0, 11.0);
        let mut west = Coordinate::new(48.0, 10.99);
        let mut east = Coordinate::new(48.0, 11.01);
        west.compute_offsets(&r);
        east.compute_offsets(&r);
        assert!(west.dist_long > 0.0);
        assert!((west.dist_long - east.dist_long).abs() < 1e-6);
    }
}

#[cfg(test)]
mod config {
    use crate::{GraphConfig, RgError};

    #[test]
    fn default_is_valid() {
        let cfg = GraphConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.progress_interval, 10);
        assert!(!cfg.cap_reached(usize::MAX));
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = GraphConfig { progress_interval: 0, ..GraphConfig::default() };
        assert!(matches!(cfg.validate(), Err(RgError::Config(_))));
    }

    #[test]
    fn zero_cap_rejected() {
        let cfg = GraphConfig { max_roads: Some(0), ..GraphConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn cap_reached() {
        let cfg = GraphConfig { max_roads: Some(3), ..GraphConfig::default() };
        assert!(!cfg.cap_reached(2));
        assert!(cfg.cap_reached(3));
    }
}
