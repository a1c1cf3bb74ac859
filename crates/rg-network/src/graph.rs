//! Route graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_cost_mm`) are sorted by
//! source node and indexed by `EdgeId`, so iterating a node's outgoing edges
//! is a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lon, lat)` to the nearest `NodeId`.  Used
//! once at path-finder construction to snap station coordinates to graph
//! nodes.

use std::collections::HashMap;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use rg_core::{EdgeId, GeoPoint, NodeId};

use crate::tables::NetworkTables;
use crate::{NetworkError, NetworkResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lon, lat]` point with
/// the associated `NodeId`.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 2], // [lon, lat]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lon/lat space.  Sufficient for
    /// nearest-node queries within a city (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlon = self.point[0] - point[0];
        let dlat = self.point[1] - point[1];
        dlon * dlon + dlat * dlat
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Directed route graph in CSR format plus a spatial index for node snapping.
///
/// All arrays are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RouteGraphBuilder`] or [`RouteGraph::from_tables`].
#[derive(Debug)]
pub struct RouteGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// External node id (as found in the link/node tables) of each node.
    pub node_ext_id: Vec<u32>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient path reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Edge length in millimetres.  Integer Dijkstra cost; saturates at
    /// ~4 295 km per edge, far beyond any urban link.
    pub edge_cost_mm: Vec<u32>,

    // ── Lookup ────────────────────────────────────────────────────────────
    ext_to_node: HashMap<u32, NodeId>,
    spatial_idx: RTree<NodeEntry>,
}

impl RouteGraph {
    /// Build the graph from a region's link and node tables.
    ///
    /// This is the "initialize graph" step of the pipeline; it runs once per
    /// region, before any vehicle is processed.  External node ids are
    /// remapped to dense `NodeId`s; a link referencing a node id absent from
    /// the node table is a hard error.
    pub fn from_tables(tables: &NetworkTables) -> NetworkResult<Self> {
        let mut builder =
            RouteGraphBuilder::with_capacity(tables.nodes.len(), tables.links.len() * 2);

        for node in &tables.nodes {
            builder.add_node(node.node_id, GeoPoint::new(node.lon, node.lat));
        }

        for link in &tables.links {
            let from = builder.node_by_ext(link.from_node).ok_or(
                NetworkError::UnknownNode { link: link.link_id, node: link.from_node },
            )?;
            let to = builder.node_by_ext(link.to_node).ok_or(
                NetworkError::UnknownNode { link: link.link_id, node: link.to_node },
            )?;
            builder.add_link(from, to, link.length_m, link.oneway != 0);
        }

        let graph = builder.build();
        log::debug!(
            "route graph built: {} nodes, {} directed edges",
            graph.node_count(),
            graph.edge_count(),
        );
        Ok(graph)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Dense `NodeId` for an external node id, if present.
    pub fn node_by_ext(&self, ext_id: u32) -> Option<NodeId> {
        self.ext_to_node.get(&ext_id).copied()
    }

    /// Return the `NodeId` of the nearest graph node to `pos`.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lon, pos.lat])
            .map(|e| e.id)
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and links in any order.  `build()` sorts edges
/// by source node, constructs the CSR arrays, and bulk-loads the R-tree.
pub struct RouteGraphBuilder {
    nodes: Vec<GeoPoint>,
    ext_ids: Vec<u32>,
    ext_to_node: HashMap<u32, NodeId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    cost_mm: u32,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from the tables.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            ext_ids: Vec::with_capacity(nodes),
            ext_to_node: HashMap::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node with its external table id and return its dense `NodeId`.
    pub fn add_node(&mut self, ext_id: u32, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.ext_ids.push(ext_id);
        self.ext_to_node.insert(ext_id, id);
        id
    }

    /// Add a link of `length_m` metres.  Bidirectional unless `oneway`.
    pub fn add_link(&mut self, from: NodeId, to: NodeId, length_m: f64, oneway: bool) {
        let cost_mm = (length_m * 1000.0).round().min(u32::MAX as f64) as u32;
        self.raw_edges.push(RawEdge { from, to, cost_mm });
        if !oneway {
            self.raw_edges.push(RawEdge { from: to, to: from, cost_mm });
        }
    }

    /// Dense id of a node added earlier under `ext_id`.
    pub fn node_by_ext(&self, ext_id: u32) -> Option<NodeId> {
        self.ext_to_node.get(&ext_id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> RouteGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost_mm: Vec<u32> = raw.iter().map(|e| e.cost_mm).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry { point: [pos.lon, pos.lat], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RouteGraph {
            node_pos: self.nodes,
            node_ext_id: self.ext_ids,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost_mm,
            ext_to_node: self.ext_to_node,
            spatial_idx,
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
