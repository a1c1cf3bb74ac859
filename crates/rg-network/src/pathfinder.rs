//! The `PathFinder` trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The trajectory synthesizer calls path-finding via the [`PathFinder`]
//! trait, so applications can swap in custom implementations (contraction
//! hierarchies, A*, external services) without touching the synthesis core.
//! The default [`DijkstraPathFinder`] is sufficient for the region tables
//! this toolkit ships with.
//!
//! # Coordinate order
//!
//! `find_path` emits **latitude-first** `[lat, lon]` pairs inside
//! [`PathSegment`] — the external path-finder convention.  The stitcher in
//! `rg-synth` performs the single lat/lon swap in the system.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use rg_core::{EdgeId, GeoPoint, NodeId, PathSegment, StationId};

use crate::graph::RouteGraph;
use crate::tables::NetworkTables;
use crate::{NetworkError, NetworkResult};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable station-to-station path-finding engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// reference across Rayon worker threads during parallel synthesis.
pub trait PathFinder: Send + Sync {
    /// Compute the path between two stations.
    ///
    /// `from == to` (or two stations snapping to the same node) is a
    /// degenerate query answered with a single-point segment, not an error.
    fn find_path(&self, from: &StationId, to: &StationId) -> NetworkResult<PathSegment>;
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Shortest-path-by-length Dijkstra over the CSR route graph.
///
/// Construction resolves every station in the station table to its nearest
/// graph node (R-tree snap) and precomputes the output coordinate of every
/// node: the `NodeR.csv` shape position when present, else the `Node.csv`
/// position.  Queries then run against dense integer ids only.
pub struct DijkstraPathFinder {
    graph: RouteGraph,
    station_nodes: HashMap<StationId, NodeId>,
    /// Output `[lat, lon]` per dense node, shape-refined where available.
    node_coords: Vec<[f64; 2]>,
}

impl DijkstraPathFinder {
    /// Build the graph and the station/coordinate lookups from one region's
    /// tables.  This is the expensive step; do it once and share the result.
    pub fn new(tables: &NetworkTables) -> NetworkResult<Self> {
        let graph = RouteGraph::from_tables(tables)?;

        let shape_by_ext: HashMap<u32, [f64; 2]> = tables
            .node_shapes
            .iter()
            .map(|s| (s.node_id, [s.lat, s.lon]))
            .collect();

        let node_coords: Vec<[f64; 2]> = graph
            .node_pos
            .iter()
            .zip(&graph.node_ext_id)
            .map(|(pos, ext)| {
                shape_by_ext
                    .get(ext)
                    .copied()
                    .unwrap_or([pos.lat, pos.lon])
            })
            .collect();

        let mut station_nodes = HashMap::with_capacity(tables.stations.len());
        for station in &tables.stations {
            let id = StationId::new(&station.station_id);
            let node = graph
                .snap_to_node(GeoPoint::new(station.lon, station.lat))
                .ok_or_else(|| NetworkError::UnknownStation(id.clone()))?;
            station_nodes.insert(id, node);
        }

        Ok(Self { graph, station_nodes, node_coords })
    }

    fn station_node(&self, station: &StationId) -> NetworkResult<NodeId> {
        self.station_nodes
            .get(station)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(station.clone()))
    }
}

impl PathFinder for DijkstraPathFinder {
    fn find_path(&self, from: &StationId, to: &StationId) -> NetworkResult<PathSegment> {
        let from_node = self.station_node(from)?;
        let to_node = self.station_node(to)?;

        let nodes = dijkstra(&self.graph, from_node, to_node).ok_or_else(|| {
            NetworkError::NoPath { from: from.clone(), to: to.clone() }
        })?;

        let coords = nodes.iter().map(|n| self.node_coords[n.index()]).collect();
        Ok(PathSegment::new(coords))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Shortest node path from `from` to `to` by edge length, or `None` if the
/// nodes are disconnected.  `from == to` yields the single-node path.
fn dijkstra(graph: &RouteGraph, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    if from == to {
        return Some(vec![from]);
    }

    let n = graph.node_count();
    // dist[v] = best known cost (mm) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Some(reconstruct(graph, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost.saturating_add(graph.edge_cost_mm[edge.index()]);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    None
}

fn reconstruct(
    graph: &RouteGraph,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
) -> Vec<NodeId> {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert!(e != EdgeId::INVALID, "broken predecessor chain");
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    nodes
}
