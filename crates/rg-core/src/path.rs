//! Station-to-station path geometry.

/// An ordered polyline between two consecutive stations in a vehicle's
/// itinerary, as produced by a path-finder.
///
/// Points are **latitude-first** `[lat, lon]` pairs — the path-finder's
/// native convention.  Consumers that need longitude-first `GeoPoint`s must
/// go through the segment stitcher, which performs the one swap in the
/// system.  A segment may be empty or a single point (degenerate query).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PathSegment {
    pub coords: Vec<[f64; 2]>,
}

impl PathSegment {
    pub fn new(coords: Vec<[f64; 2]>) -> Self {
        Self { coords }
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
