//! Synthesis parameters and garage configuration.
//!
//! Everything the orchestrator needs arrives in one explicit [`SynthConfig`]
//! value — no globals, no fixed file paths inside the engine.  The garage
//! station id lives in a small JSON resource of its own because it is shared
//! with the playback frontend.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rg_core::StationId;

use crate::SynthError;

/// Constant travel speed assumed between stops.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;
/// Pause injected at each intermediate stop.
pub const DEFAULT_DWELL_SECS: u32 = 60;

/// Parameters of one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// The depot station that begins and ends every vehicle's itinerary.
    pub garage_station: StationId,
    pub speed_kmh: f64,
    pub dwell_secs: u32,
}

impl SynthConfig {
    /// Config with the default speed and dwell.
    pub fn new(garage_station: StationId) -> Self {
        Self {
            garage_station,
            speed_kmh: DEFAULT_SPEED_KMH,
            dwell_secs: DEFAULT_DWELL_SECS,
        }
    }
}

// ── Garage resource ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GarageFile {
    garage_station_id: String,
}

/// Read the garage station id from its JSON resource
/// (`{"garageStationId": "..."}`).
pub fn load_garage_station(path: &Path) -> Result<StationId, SynthError> {
    let file = std::fs::File::open(path)?;
    read_garage_station(file)
}

/// Like [`load_garage_station`] but accepts any `Read` source.
pub fn read_garage_station<R: Read>(reader: R) -> Result<StationId, SynthError> {
    let parsed: GarageFile = serde_json::from_reader(reader)
        .map_err(|e| SynthError::Config(e.to_string()))?;
    let id = StationId::new(&parsed.garage_station_id);
    if id.as_str().is_empty() {
        return Err(SynthError::Config("garageStationId is empty".to_owned()));
    }
    Ok(id)
}
