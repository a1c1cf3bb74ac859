//! `rg-synth` — the trajectory synthesis engine.
//!
//! Converts per-vehicle stop schedules into dense, time-sampled coordinate
//! tracks: one point per second of travel at a constant speed, with dwell
//! pauses injected at intermediate stops.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`resample`] | `resample_by_speed` — equal-time-interval resampling     |
//! | [`stitch`]   | `stitch_segments` — segment concatenation + dwell pauses |
//! | [`synth`]    | `synthesize_routes`, `VehicleRoute`, `SynthReport`       |
//! | [`config`]   | `SynthConfig`, garage-id JSON loading                    |
//! | [`error`]    | `SynthError`                                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Per-vehicle synthesis runs on the Rayon thread pool.      |

pub mod config;
pub mod error;
pub mod resample;
pub mod stitch;
pub mod synth;


pub use config::{
    DEFAULT_DWELL_SECS, DEFAULT_SPEED_KMH, SynthConfig, load_garage_station,
    read_garage_station,
};
pub use error::SynthError;
pub use resample::resample_by_speed;
pub use stitch::stitch_segments;
pub use synth::{SynthFailure, SynthReport, VehicleRoute, synthesize_routes};
