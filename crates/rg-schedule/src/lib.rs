//! `rg-schedule` — vehicle trip schedules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`records`] | `StopRecord`, `VehicleTrip`                              |
//! | [`loader`]  | `load_trips_csv`, `load_trips_reader`, count parsing     |
//! | [`error`]   | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! The loader converts the flat schedule table — one row per vehicle with up
//! to ten suffixed stop-column groups — into typed [`VehicleTrip`]s before
//! any domain logic runs, so the synthesis engine never sees column names.

pub mod error;
pub mod loader;
pub mod records;


pub use error::{ScheduleError, ScheduleResult};
pub use loader::{MAX_STOPS, load_trips_csv, load_trips_reader, parse_optional_count};
pub use records::{StopRecord, VehicleTrip};
