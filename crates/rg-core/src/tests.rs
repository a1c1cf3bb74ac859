//! Unit tests for rg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, StationId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn station_id_trims() {
        let s = StationId::new("  S101 ");
        assert_eq!(s.as_str(), "S101");
        assert_eq!(s.to_string(), "S101");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(127.289, 36.480);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on the 6371 km sphere.
        let a = GeoPoint::new(127.0, 36.0);
        let b = GeoPoint::new(127.0, 37.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(127.0, 36.0);
        let b = GeoPoint::new(127.3, 36.2);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(1.0, 2.0));
    }
}

#[cfg(test)]
mod wire {
    use crate::GeoPoint;

    #[test]
    fn serializes_lon_first() {
        let p = GeoPoint::new(127.5, 36.25);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[127.5,36.25]");
    }

    #[test]
    fn deserialize_roundtrip() {
        let p: GeoPoint = serde_json::from_str("[127.5,36.25]").unwrap();
        assert_eq!(p, GeoPoint::new(127.5, 36.25));
    }
}
