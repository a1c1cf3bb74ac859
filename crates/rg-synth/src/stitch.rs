//! Segment stitching: concatenation plus dwell pauses.

use rg_core::{GeoPoint, PathSegment};

use crate::resample::resample_by_speed;

/// Stitch an ordered list of station-to-station segments into one continuous
/// resampled track.
///
/// Per segment, in order: swap its latitude-first coords into longitude-first
/// [`GeoPoint`]s (the **only** lat/lon swap in the system), resample at
/// `speed_kmh`, and append.  After every non-final segment that produced at
/// least one point, its last point is repeated `dwell_secs` times — the
/// vehicle sitting still at the stop for that many one-second ticks.  No
/// dwell after the final segment, and none for a segment that resampled to
/// nothing (a degenerate hop must not produce a spurious pause).
pub fn stitch_segments(
    segments: &[PathSegment],
    speed_kmh: f64,
    dwell_secs: u32,
) -> Vec<GeoPoint> {
    let mut track = Vec::new();
    let last_idx = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        let lon_first: Vec<GeoPoint> = segment
            .coords
            .iter()
            .map(|c| GeoPoint::new(c[1], c[0]))
            .collect();

        let resampled = resample_by_speed(&lon_first, speed_kmh);
        let Some(&stop_point) = resampled.last() else {
            continue;
        };

        track.extend_from_slice(&resampled);
        if i < last_idx {
            track.extend(std::iter::repeat(stop_point).take(dwell_secs as usize));
        }
    }

    track
}
