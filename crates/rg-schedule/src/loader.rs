//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per vehicle.  Three metadata columns, then up to [`MAX_STOPS`]
//! groups of five suffixed stop columns:
//!
//! ```csv
//! Vehicle_ID,Vehicle_Type,StartTime,1_StationID,1_Pickup_general,1_Pickup_wheelchair,1_Dropoff_general,1_Dropoff_wheelchair,2_StationID,...
//! V001,shuttle,07:30,S101,2,,1,,S205,...
//! ```
//!
//! # Contiguity
//!
//! Stop slots are consumed in order from `1_`.  The first slot whose
//! `{i}_StationID` cell is empty (or a `nan` placeholder) after trimming
//! terminates the stop list; later slots are never consulted, even if
//! populated.  Stop-column groups absent from the header behave like empty
//! cells.
//!
//! # Count cells
//!
//! Count cells are parsed by [`parse_optional_count`]: best-effort, numeric
//! (`"3.0"` → 3), silently absent on anything else.  Data-quality tolerance
//! is intentional — a bad count never fails a row.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use rg_core::StationId;

use crate::records::{StopRecord, VehicleTrip};
use crate::{ScheduleError, ScheduleResult};

/// Maximum number of stop-column groups in the schedule table.
pub const MAX_STOPS: usize = 10;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load all vehicle trips from a schedule CSV file, preserving row order.
pub fn load_trips_csv(path: &Path) -> ScheduleResult<Vec<VehicleTrip>> {
    let file = std::fs::File::open(path)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_trips_reader<R: Read>(reader: R) -> ScheduleResult<Vec<VehicleTrip>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| ScheduleError::Parse(e.to_string()))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut trips = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        trips.push(columns.trip_from_row(&row));
    }
    log::debug!("loaded {} vehicle trips", trips.len());
    Ok(trips)
}

/// Best-effort parse of a passenger-count cell.
///
/// Accepts any finite, non-negative numeric rendering that fits in a `u32`
/// and truncates to an integer (`"3"`, `"3.0"`, `" 3 "` all yield 3).  Empty
/// cells, `nan` placeholders, negatives, out-of-range values, and garbage
/// yield `None` — the field is then omitted from the record entirely.
pub fn parse_optional_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

// ── Column resolution ─────────────────────────────────────────────────────────

/// Pre-resolved header positions, computed once per file.
struct ColumnIndex {
    vehicle_id: usize,
    vehicle_type: usize,
    start_time: usize,
    stops: Vec<StopColumns>,
}

/// Header positions of one `{i}_*` stop-column group.  Any column may be
/// absent; an absent column reads as an empty cell.
#[derive(Default)]
struct StopColumns {
    station: Option<usize>,
    pickup_general: Option<usize>,
    pickup_wheelchair: Option<usize>,
    dropoff_general: Option<usize>,
    dropoff_wheelchair: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> ScheduleResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| {
            find(name).ok_or(ScheduleError::MissingColumn(name))
        };

        let stops = (1..=MAX_STOPS)
            .map(|i| StopColumns {
                station: find(&format!("{i}_StationID")),
                pickup_general: find(&format!("{i}_Pickup_general")),
                pickup_wheelchair: find(&format!("{i}_Pickup_wheelchair")),
                dropoff_general: find(&format!("{i}_Dropoff_general")),
                dropoff_wheelchair: find(&format!("{i}_Dropoff_wheelchair")),
            })
            .collect();

        Ok(Self {
            vehicle_id: require("Vehicle_ID")?,
            vehicle_type: require("Vehicle_Type")?,
            start_time: require("StartTime")?,
            stops,
        })
    }

    fn trip_from_row(&self, row: &StringRecord) -> VehicleTrip {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

        let mut stops = Vec::new();
        for group in &self.stops {
            let station = cell(group.station).trim();
            // First empty slot ends the stop sequence (contiguity rule).
            if station.is_empty() || station.eq_ignore_ascii_case("nan") {
                break;
            }
            stops.push(StopRecord {
                station: StationId::new(station),
                pickup_general: parse_optional_count(cell(group.pickup_general)),
                pickup_wheelchair: parse_optional_count(cell(group.pickup_wheelchair)),
                dropoff_general: parse_optional_count(cell(group.dropoff_general)),
                dropoff_wheelchair: parse_optional_count(cell(group.dropoff_wheelchair)),
            });
        }

        VehicleTrip {
            vehicle_id: cell(Some(self.vehicle_id)).trim().to_owned(),
            vehicle_type: cell(Some(self.vehicle_type)).trim().to_owned(),
            start_time: cell(Some(self.start_time)).to_owned(),
            stops,
        }
    }
}
