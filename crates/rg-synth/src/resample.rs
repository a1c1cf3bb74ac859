//! Equal-time-interval polyline resampling.
//!
//! The playback contract is **one output point per elapsed second** of
//! travel at a constant speed, so the sample distance in metres equals the
//! speed in metres per second.  For a route of total arc length `L` the
//! output is the first input point plus `floor(L / sample)` interior
//! samples, each exactly one sample distance further along the path.

use rg_core::GeoPoint;

/// Resample `points` so consecutive outputs are one second of travel apart
/// at `speed_kmh`.
///
/// - Fewer than 2 input points yield an empty output (a degenerate segment,
///   not an error).
/// - The first input point is always emitted first.
/// - Arc length is measured with the haversine distance; the emitted sample
///   itself is a chord interpolation between the two enclosing vertices.
///
/// The walk keeps a `carry` of metres already travelled past the last
/// emitted sample.  A source segment long relative to the sample distance
/// yields many samples; a short one may yield none and only grow the carry.
/// The `>=` comparison is deliberate: a sample landing exactly on a vertex
/// is emitted, not dropped.
pub fn resample_by_speed(points: &[GeoPoint], speed_kmh: f64) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return Vec::new();
    }

    // Distance covered in one second; also the inter-sample arc length.
    let sample_m = speed_kmh * 1000.0 / 3600.0;
    if sample_m <= 0.0 {
        // A stationary vehicle produces no one-second samples.
        return Vec::new();
    }

    let mut out = vec![points[0]];
    let mut carry = 0.0;

    for pair in points.windows(2) {
        let mut cursor = pair[0];
        let end = pair[1];
        let mut remaining = cursor.distance_m(end);

        while carry + remaining >= sample_m {
            let fraction = (sample_m - carry) / remaining;
            let sample = cursor.lerp(end, fraction);
            out.push(sample);

            remaining -= sample_m - carry;
            carry = 0.0;
            cursor = sample;
        }
        carry += remaining;
    }

    out
}
