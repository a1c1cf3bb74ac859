//! Network-subsystem error type.

use thiserror::Error;

use rg_core::StationId;

/// Errors produced by `rg-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("station {0} not found in network")]
    UnknownStation(StationId),

    #[error("no path from station {from} to station {to}")]
    NoPath { from: StationId, to: StationId },

    #[error("link {link} references unknown node {node}")]
    UnknownNode { link: u32, node: u32 },

    #[error("network table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
