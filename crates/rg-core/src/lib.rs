//! `rg-core` — foundational types for the `routegen` trajectory toolkit.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and a single external one (`serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`, `StationId`                       |
//! | [`geo`]     | `GeoPoint`, haversine distance                        |
//! | [`path`]    | `PathSegment` (station-to-station polyline)           |

pub mod geo;
pub mod ids;
pub mod path;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, StationId};
pub use path::PathSegment;
