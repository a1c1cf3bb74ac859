//! Per-region network table loading.
//!
//! A region directory holds four CSV resources:
//!
//! | File          | Row type         | Consumed by                         |
//! |---------------|------------------|-------------------------------------|
//! | `Link.csv`    | [`LinkRow`]      | graph builder (edges)               |
//! | `Station.csv` | [`StationRow`]   | station → node snapping             |
//! | `Node.csv`    | [`NodeRow`]      | graph builder (node positions)      |
//! | `NodeR.csv`   | [`NodeShapeRow`] | path geometry refinement            |
//!
//! Columns beyond the ones named below are ignored, so the loaders tolerate
//! regions that carry extra attribute columns.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{NetworkError, NetworkResult};

// ── Row types ─────────────────────────────────────────────────────────────────

/// One directed (or bidirectional) network edge.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRow {
    #[serde(rename = "LinkID")]
    pub link_id: u32,
    #[serde(rename = "FromNodeID")]
    pub from_node: u32,
    #[serde(rename = "ToNodeID")]
    pub to_node: u32,
    /// Physical length in metres.
    #[serde(rename = "Length")]
    pub length_m: f64,
    /// Non-zero means the link carries traffic only from → to.
    #[serde(rename = "Oneway", default)]
    pub oneway: u8,
}

/// One named stop/garage location.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRow {
    #[serde(rename = "StationID")]
    pub station_id: String,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
}

/// One graph node position.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRow {
    #[serde(rename = "NodeID")]
    pub node_id: u32,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
}

/// Alternate node representation: display-refined coordinates used when
/// emitting path geometry.  Nodes absent from this table fall back to their
/// [`NodeRow`] position.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeShapeRow {
    #[serde(rename = "NodeID")]
    pub node_id: u32,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
}

// ── NetworkTables ─────────────────────────────────────────────────────────────

/// The four tables of one region, loaded eagerly.
#[derive(Debug, Clone, Default)]
pub struct NetworkTables {
    pub links: Vec<LinkRow>,
    pub stations: Vec<StationRow>,
    pub nodes: Vec<NodeRow>,
    pub node_shapes: Vec<NodeShapeRow>,
}

impl NetworkTables {
    /// Load all four tables from a region directory.
    pub fn load(region_dir: &Path) -> NetworkResult<Self> {
        let tables = Self {
            links: read_table_file(&region_dir.join("Link.csv"))?,
            stations: read_table_file(&region_dir.join("Station.csv"))?,
            nodes: read_table_file(&region_dir.join("Node.csv"))?,
            node_shapes: read_table_file(&region_dir.join("NodeR.csv"))?,
        };
        log::info!(
            "loaded network tables from {}: {} links, {} stations, {} nodes, {} node shapes",
            region_dir.display(),
            tables.links.len(),
            tables.stations.len(),
            tables.nodes.len(),
            tables.node_shapes.len(),
        );
        Ok(tables)
    }

    /// Assemble tables from already-open readers.  Useful for testing (pass
    /// `std::io::Cursor`s) or loading from non-file sources.
    pub fn from_readers<R: Read>(
        links: R,
        stations: R,
        nodes: R,
        node_shapes: R,
    ) -> NetworkResult<Self> {
        Ok(Self {
            links: read_table(links)?,
            stations: read_table(stations)?,
            nodes: read_table(nodes)?,
            node_shapes: read_table(node_shapes)?,
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Deserialize every row of one CSV table.
pub fn read_table<R: Read, T: DeserializeOwned>(reader: R) -> NetworkResult<Vec<T>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| NetworkError::Parse(e.to_string())))
        .collect()
}

fn read_table_file<T: DeserializeOwned>(path: &Path) -> NetworkResult<Vec<T>> {
    let file = std::fs::File::open(path)?;
    read_table(file)
}
