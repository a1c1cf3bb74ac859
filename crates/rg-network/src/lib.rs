//! `rg-network` — route network tables, graph, and path-finding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`tables`]     | `NetworkTables` and the four per-region CSV row types     |
//! | [`graph`]      | `RouteGraph` (CSR + R-tree), `RouteGraphBuilder`          |
//! | [`pathfinder`] | `PathFinder` trait, `DijkstraPathFinder`                  |
//! | [`error`]      | `NetworkError`, `NetworkResult<T>`                        |
//!
//! The path-finder is the system's only producer of [`PathSegment`]s; its
//! output is latitude-first, matching the external convention the trajectory
//! stitcher expects to swap.
//!
//! [`PathSegment`]: rg_core::PathSegment

pub mod error;
pub mod graph;
pub mod pathfinder;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{RouteGraph, RouteGraphBuilder};
pub use pathfinder::{DijkstraPathFinder, PathFinder};
pub use tables::{LinkRow, NetworkTables, NodeRow, NodeShapeRow, StationRow};
