//! Typed schedule records.

use serde::Serialize;

use rg_core::StationId;

/// One intermediate stop of a vehicle's trip.
///
/// The four passenger-action counts are best-effort: a source cell that is
/// missing or unparseable leaves its field `None`, and `None` fields are
/// **omitted** from serialized output rather than written as `null` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRecord {
    pub station: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_general: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_wheelchair: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_general: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_wheelchair: Option<u32>,
}

impl StopRecord {
    /// A stop with no passenger-action counts.
    pub fn at(station: StationId) -> Self {
        Self {
            station,
            pickup_general: None,
            pickup_wheelchair: None,
            dropoff_general: None,
            dropoff_wheelchair: None,
        }
    }
}

/// One vehicle's scheduled trip: metadata plus the ordered stop sequence.
///
/// `start_time` is an opaque timestamp string passed through to the output
/// unmodified.  A trip may have zero stops after contiguity truncation; the
/// synthesizer decides how to treat that (skip and report), not the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleTrip {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub start_time: String,
    pub stops: Vec<StopRecord>,
}

impl VehicleTrip {
    /// Station ids of the stops, in order.
    pub fn stop_stations(&self) -> impl Iterator<Item = &StationId> {
        self.stops.iter().map(|s| &s.station)
    }
}
