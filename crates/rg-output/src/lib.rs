//! `rg-output` — route document serialization.
//!
//! The synthesis result is persisted as one JSON object:
//!
//! ```json
//! {
//!   "routes": [
//!     {
//!       "vehicle_id": "V001",
//!       "vehicle_type": "shuttle",
//!       "start_time": "07:30:00",
//!       "stops": [{"station": "S101", "pickup_general": 2}],
//!       "coords": [[127.2891, 36.4801], [127.2892, 36.4802]]
//!     }
//!   ]
//! }
//! ```
//!
//! `coords` entries are `[longitude, latitude]` number pairs; stop count
//! fields that were unparseable in the source are absent, never `null`.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use rg_synth::VehicleRoute;


// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;

// ── Document ──────────────────────────────────────────────────────────────────

/// The top-level output object, borrowing the synthesized routes.
#[derive(Serialize)]
pub struct RouteDocument<'a> {
    pub routes: &'a [VehicleRoute],
}

/// Serialize the route document to any writer.
pub fn write_routes<W: Write>(writer: W, routes: &[VehicleRoute]) -> OutputResult<()> {
    serde_json::to_writer(writer, &RouteDocument { routes })?;
    Ok(())
}

/// Write the route document to `path`, creating or truncating the file.
pub fn write_routes_json(path: &Path, routes: &[VehicleRoute]) -> OutputResult<()> {
    let file = std::fs::File::create(path)?;
    write_routes(std::io::BufWriter::new(file), routes)?;
    log::info!("wrote {} routes to {}", routes.len(), path.display());
    Ok(())
}
