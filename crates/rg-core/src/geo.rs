//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` stores **longitude first** — the order the output document and
//! the resampler use everywhere.  The external path-finder hands back
//! latitude-first pairs; the segment stitcher performs the single swap in the
//! system, so nothing outside it ever touches latitude-first data.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A WGS-84 geographic coordinate in double-precision degrees, longitude
/// first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres on a spherical Earth.
    ///
    /// The `atan2` form keeps the result stable for both near-coincident and
    /// near-antipodal pairs; coincident points yield ~0.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Linear interpolation `fraction` of the way from `self` to `other`.
    ///
    /// Chord interpolation, not great-circle — adjacent samples in a resampled
    /// track are metres apart, where the difference is far below coordinate
    /// precision.
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * fraction,
            lat: self.lat + (other.lat - self.lat) * fraction,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── Wire form ─────────────────────────────────────────────────────────────────

/// Serialized as a bare `[lon, lat]` pair — the coordinate-track element
/// format of the route document.
impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.lon)?;
        tup.serialize_element(&self.lat)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairVisitor;

        impl<'de> Visitor<'de> for PairVisitor {
            type Value = GeoPoint;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a [lon, lat] pair")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GeoPoint, A::Error> {
                let lon = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(GeoPoint { lon, lat })
            }
        }

        deserializer.deserialize_tuple(2, PairVisitor)
    }
}
