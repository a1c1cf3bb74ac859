//! Synthesis error type.
//!
//! All failure boundaries are per-vehicle: nothing here aborts a batch.  The
//! worst case is a report whose `routes` collection is empty.

use thiserror::Error;

use rg_core::StationId;
use rg_network::NetworkError;

/// Errors produced while synthesizing one vehicle's route or loading the
/// synthesis configuration.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The trip had zero valid stops after contiguity truncation.
    #[error("trip has no valid stops")]
    NoValidStops,

    /// The path-finder failed for one station pair; the whole vehicle is
    /// abandoned and any partial segments are discarded.
    #[error("path resolution failed from {from} to {to}: {source}")]
    PathResolution {
        from: StationId,
        to: StationId,
        #[source]
        source: NetworkError,
    },

    #[error("garage configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
