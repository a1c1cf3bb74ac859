//! Unit tests for rg-network.
//!
//! All tests use hand-crafted tables or builders so they run without any
//! region files on disk.

#[cfg(test)]
mod helpers {
    use crate::tables::{LinkRow, NetworkTables, NodeRow, NodeShapeRow, StationRow};

    fn node(node_id: u32, lat: f64, lon: f64) -> NodeRow {
        NodeRow { node_id, lat, lon }
    }

    fn link(link_id: u32, from_node: u32, to_node: u32, length_m: f64) -> LinkRow {
        LinkRow { link_id, from_node, to_node, length_m, oneway: 0 }
    }

    fn station(station_id: &str, lat: f64, lon: f64) -> StationRow {
        StationRow { station_id: station_id.to_owned(), lat, lon }
    }

    /// A four-node line-with-detour network:
    ///
    /// ```text
    ///   1 ──100──> 2 ──100──> 3        stations: A@1, B@3
    ///   1 ──500──> 4 ──100──> 3
    /// ```
    ///
    /// Shortest 1→3 by length is always 1→2→3 (200 m vs 600 m).
    pub fn detour_tables() -> NetworkTables {
        NetworkTables {
            nodes: vec![
                node(1, 36.480, 127.280),
                node(2, 36.481, 127.281),
                node(3, 36.482, 127.282),
                node(4, 36.479, 127.283),
            ],
            links: vec![
                link(10, 1, 2, 100.0),
                link(11, 2, 3, 100.0),
                link(12, 1, 4, 500.0),
                link(13, 4, 3, 100.0),
            ],
            stations: vec![
                station("A", 36.480, 127.280),
                station("B", 36.482, 127.282),
            ],
            node_shapes: vec![],
        }
    }
}

// ── Table loading ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tables {
    use std::io::Cursor;

    use crate::tables::{LinkRow, NetworkTables, read_table};
    use crate::NetworkError;

    #[test]
    fn link_rows_with_extra_columns() {
        let csv = "LinkID,FromNodeID,ToNodeID,Length,Oneway,MaxSpeed\n\
                   10,1,2,100.5,0,50\n\
                   11,2,3,80.0,1,50\n";
        let links: Vec<LinkRow> = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].length_m, 100.5);
        assert_eq!(links[1].oneway, 1);
    }

    #[test]
    fn oneway_column_optional() {
        let csv = "LinkID,FromNodeID,ToNodeID,Length\n10,1,2,100.0\n";
        let links: Vec<LinkRow> = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(links[0].oneway, 0);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "LinkID,FromNodeID,ToNodeID,Length\n10,1,two,100.0\n";
        let err = read_table::<_, LinkRow>(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn from_readers_assembles_all_four() {
        let tables = NetworkTables::from_readers(
            Cursor::new("LinkID,FromNodeID,ToNodeID,Length\n10,1,2,100.0\n"),
            Cursor::new("StationID,Lat,Lon\nA,36.48,127.28\n"),
            Cursor::new("NodeID,Lat,Lon\n1,36.48,127.28\n2,36.49,127.29\n"),
            Cursor::new("NodeID,Lat,Lon\n"),
        )
        .unwrap();
        assert_eq!(tables.links.len(), 1);
        assert_eq!(tables.stations.len(), 1);
        assert_eq!(tables.nodes.len(), 2);
        assert!(tables.node_shapes.is_empty());
    }
}

// ── Graph builder & structure ─────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rg_core::GeoPoint;

    use crate::graph::{RouteGraph, RouteGraphBuilder};
    use crate::NetworkError;

    #[test]
    fn empty_build() {
        let g = RouteGraphBuilder::new().build();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn bidirectional_link_adds_two_edges() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(100, GeoPoint::new(127.28, 36.48));
        let c = b.add_node(101, GeoPoint::new(127.29, 36.49));
        b.add_link(a, c, 1_000.0, false);
        let g = b.build();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.out_degree(c), 1);
    }

    #[test]
    fn oneway_link_has_no_return_edge() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(100, GeoPoint::new(127.28, 36.48));
        let c = b.add_node(101, GeoPoint::new(127.29, 36.49));
        b.add_link(a, c, 1_000.0, true);
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(c), 0);
    }

    #[test]
    fn csr_edges_have_correct_source() {
        let g = RouteGraph::from_tables(&super::helpers::detour_tables()).unwrap();
        let n1 = g.node_by_ext(1).unwrap();
        // node 1 reaches nodes 2 and 4.
        assert_eq!(g.out_degree(n1), 2);
        for e in g.out_edges(n1) {
            assert_eq!(g.edge_from[e.index()], n1);
        }
    }

    #[test]
    fn from_tables_rejects_unknown_node() {
        let mut tables = super::helpers::detour_tables();
        tables.links[0].to_node = 999;
        let err = RouteGraph::from_tables(&tables).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode { link: 10, node: 999 }));
    }

    #[test]
    fn edge_cost_is_millimetres() {
        let mut b = RouteGraphBuilder::new();
        let a = b.add_node(1, GeoPoint::new(0.0, 0.0));
        let c = b.add_node(2, GeoPoint::new(0.001, 0.0));
        b.add_link(a, c, 123.456, true);
        let g = b.build();
        assert_eq!(g.edge_cost_mm[0], 123_456);
    }
}

// ── Station snapping ──────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use rg_core::GeoPoint;

    use crate::graph::{RouteGraph, RouteGraphBuilder};

    #[test]
    fn snap_exact_position() {
        let g = RouteGraph::from_tables(&super::helpers::detour_tables()).unwrap();
        let n1 = g.node_by_ext(1).unwrap();
        assert_eq!(g.snap_to_node(GeoPoint::new(127.280, 36.480)), Some(n1));
    }

    #[test]
    fn snap_nearest() {
        let g = RouteGraph::from_tables(&super::helpers::detour_tables()).unwrap();
        let n2 = g.node_by_ext(2).unwrap();
        // Slightly off node 2's position — still snaps to node 2.
        assert_eq!(g.snap_to_node(GeoPoint::new(127.2812, 36.4811)), Some(n2));
    }

    #[test]
    fn empty_graph_returns_none() {
        let g = RouteGraphBuilder::new().build();
        assert!(g.snap_to_node(GeoPoint::new(127.0, 36.0)).is_none());
    }
}

// ── Path-finding ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use rg_core::StationId;

    use crate::pathfinder::{DijkstraPathFinder, PathFinder};
    use crate::tables::{NodeShapeRow, StationRow};
    use crate::NetworkError;

    #[test]
    fn shortest_path_by_length() {
        let finder = DijkstraPathFinder::new(&super::helpers::detour_tables()).unwrap();
        let seg = finder
            .find_path(&StationId::new("A"), &StationId::new("B"))
            .unwrap();
        // 1→2→3, never the 600 m detour via node 4.
        assert_eq!(seg.len(), 3);
        assert_eq!(seg.coords[0], [36.480, 127.280]);
        assert_eq!(seg.coords[1], [36.481, 127.281]);
        assert_eq!(seg.coords[2], [36.482, 127.282]);
    }

    #[test]
    fn coords_are_latitude_first() {
        let finder = DijkstraPathFinder::new(&super::helpers::detour_tables()).unwrap();
        let seg = finder
            .find_path(&StationId::new("A"), &StationId::new("B"))
            .unwrap();
        // Latitudes ~36, longitudes ~127 — order is unambiguous here.
        for c in &seg.coords {
            assert!(c[0] < 90.0 && c[1] > 90.0, "expected [lat, lon], got {c:?}");
        }
    }

    #[test]
    fn same_station_yields_single_point() {
        let finder = DijkstraPathFinder::new(&super::helpers::detour_tables()).unwrap();
        let seg = finder
            .find_path(&StationId::new("A"), &StationId::new("A"))
            .unwrap();
        assert_eq!(seg.coords, vec![[36.480, 127.280]]);
    }

    #[test]
    fn unknown_station() {
        let finder = DijkstraPathFinder::new(&super::helpers::detour_tables()).unwrap();
        let err = finder
            .find_path(&StationId::new("A"), &StationId::new("ZZZ"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::UnknownStation(s) if s.as_str() == "ZZZ"));
    }

    #[test]
    fn disconnected_stations_have_no_path() {
        let mut tables = super::helpers::detour_tables();
        // Island node 5 with its own station, no links.
        tables.nodes.push(crate::tables::NodeRow {
            node_id: 5,
            lat: 36.600,
            lon: 127.500,
        });
        tables.stations.push(StationRow {
            station_id: "ISLAND".to_owned(),
            lat: 36.600,
            lon: 127.500,
        });
        let finder = DijkstraPathFinder::new(&tables).unwrap();
        let err = finder
            .find_path(&StationId::new("A"), &StationId::new("ISLAND"))
            .unwrap_err();
        assert!(
            matches!(err, NetworkError::NoPath { ref from, ref to }
                if from.as_str() == "A" && to.as_str() == "ISLAND")
        );
    }

    #[test]
    fn node_shape_overrides_emitted_coordinate() {
        let mut tables = super::helpers::detour_tables();
        tables.node_shapes.push(NodeShapeRow {
            node_id: 2,
            lat: 36.4815,
            lon: 127.2815,
        });
        let finder = DijkstraPathFinder::new(&tables).unwrap();
        let seg = finder
            .find_path(&StationId::new("A"), &StationId::new("B"))
            .unwrap();
        assert_eq!(seg.coords[1], [36.4815, 127.2815]);
        // Endpoints keep their Node.csv positions.
        assert_eq!(seg.coords[0], [36.480, 127.280]);
    }
}
