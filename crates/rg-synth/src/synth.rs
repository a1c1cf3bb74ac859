//! The per-vehicle orchestrator.
//!
//! For each trip: build the station sequence `[garage] + stops + [garage]`,
//! resolve every consecutive pair through the [`PathFinder`], and stitch the
//! resulting segments into the final coordinate track.  Failures are
//! isolated per vehicle — a failed vehicle is reported and leaves a gap in
//! the output, never a placeholder and never partial data.

use serde::Serialize;

use rg_core::{GeoPoint, PathSegment, StationId};
use rg_network::PathFinder;
use rg_schedule::{StopRecord, VehicleTrip};

use crate::config::SynthConfig;
use crate::stitch::stitch_segments;
use crate::SynthError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ── Output types ──────────────────────────────────────────────────────────────

/// One successfully synthesized vehicle route, ready for serialization.
///
/// `coords` is the dense playback track: longitude-first points, one per
/// second of travel, dwell pauses included.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleRoute {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub start_time: String,
    pub stops: Vec<StopRecord>,
    pub coords: Vec<GeoPoint>,
}

/// A reported per-vehicle failure.  The vehicle is absent from the routes.
#[derive(Debug)]
pub struct SynthFailure {
    pub vehicle_id: String,
    pub reason: SynthError,
}

/// The outcome of one synthesis batch: successful routes in input order,
/// plus the failures that explain every gap.
#[derive(Debug, Default)]
pub struct SynthReport {
    pub routes: Vec<VehicleRoute>,
    pub failures: Vec<SynthFailure>,
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

/// Synthesize routes for every trip in the batch.
///
/// Trips are processed in input order and successful routes keep that order.
/// No failure aborts the batch.  With the `parallel` feature the per-vehicle
/// work runs on the Rayon pool; `collect` preserves ordering, so the report
/// is identical either way.
pub fn synthesize_routes(
    trips: &[VehicleTrip],
    finder: &dyn PathFinder,
    config: &SynthConfig,
) -> SynthReport {
    #[cfg(feature = "parallel")]
    let results: Vec<Result<VehicleRoute, SynthError>> = trips
        .par_iter()
        .map(|trip| synthesize_trip(trip, finder, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<VehicleRoute, SynthError>> = trips
        .iter()
        .map(|trip| synthesize_trip(trip, finder, config))
        .collect();

    let mut report = SynthReport::default();
    for (trip, result) in trips.iter().zip(results) {
        match result {
            Ok(route) => report.routes.push(route),
            Err(reason) => {
                match &reason {
                    SynthError::NoValidStops => {
                        log::warn!("vehicle {} has no valid stops; skipping", trip.vehicle_id);
                    }
                    SynthError::PathResolution { from, to, source } => {
                        log::warn!(
                            "vehicle {}: path resolution {from} -> {to} failed ({source}); dropping vehicle",
                            trip.vehicle_id,
                        );
                    }
                    other => log::warn!("vehicle {}: {other}", trip.vehicle_id),
                }
                report.failures.push(SynthFailure {
                    vehicle_id: trip.vehicle_id.clone(),
                    reason,
                });
            }
        }
    }
    report
}

/// Synthesize a single vehicle.  Fail-fast: the first path-resolution error
/// abandons the vehicle and discards any segments already computed.
fn synthesize_trip(
    trip: &VehicleTrip,
    finder: &dyn PathFinder,
    config: &SynthConfig,
) -> Result<VehicleRoute, SynthError> {
    if trip.stops.is_empty() {
        return Err(SynthError::NoValidStops);
    }

    // Station sequence invariant: garage → stops → garage.
    let mut stations: Vec<&StationId> = Vec::with_capacity(trip.stops.len() + 2);
    stations.push(&config.garage_station);
    stations.extend(trip.stop_stations());
    stations.push(&config.garage_station);

    let mut segments: Vec<PathSegment> = Vec::with_capacity(stations.len() - 1);
    for pair in stations.windows(2) {
        let segment = finder.find_path(pair[0], pair[1]).map_err(|source| {
            SynthError::PathResolution {
                from: pair[0].clone(),
                to: pair[1].clone(),
                source,
            }
        })?;
        segments.push(segment);
    }

    let coords = stitch_segments(&segments, config.speed_kmh, config.dwell_secs);

    Ok(VehicleRoute {
        vehicle_id: trip.vehicle_id.clone(),
        vehicle_type: trip.vehicle_type.clone(),
        start_time: trip.start_time.clone(),
        stops: trip.stops.clone(),
        coords,
    })
}
