//! `routegen` — synthesize playback trajectories from vehicle schedules.
//!
//! Reads a region's network tables and a vehicle schedule CSV, resolves each
//! vehicle's garage → stops → garage path, and writes the resampled route
//! document as JSON.
//!
//! ```text
//! routegen --schedule schedule.csv --out routes.json \
//!          --network-dir data/ODD --region sejong --garage public/garage.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use rg_network::{DijkstraPathFinder, NetworkTables};
use rg_output::write_routes_json;
use rg_schedule::load_trips_csv;
use rg_synth::{SynthConfig, load_garage_station, synthesize_routes};

#[derive(StructOpt)]
#[structopt(name = "routegen", about = "Vehicle schedule to playback trajectory synthesis")]
struct Opt {
    /// Vehicle schedule CSV (one row per vehicle).
    #[structopt(long, parse(from_os_str))]
    schedule: PathBuf,

    /// Output JSON path for the route document.
    #[structopt(long, parse(from_os_str))]
    out: PathBuf,

    /// Directory holding one subdirectory of network tables per region.
    #[structopt(long, parse(from_os_str), default_value = "data/ODD")]
    network_dir: PathBuf,

    /// Region whose Link/Station/Node/NodeR tables to load.
    #[structopt(long, default_value = "sejong")]
    region: String,

    /// Garage configuration JSON ({"garageStationId": "..."}).
    #[structopt(long, parse(from_os_str), default_value = "public/garage.json")]
    garage: PathBuf,

    /// Constant travel speed between stops, km/h.
    #[structopt(long, default_value = "30")]
    speed_kmh: f64,

    /// Pause at each intermediate stop, seconds.
    #[structopt(long, default_value = "60")]
    dwell_secs: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let garage = load_garage_station(&opt.garage)
        .with_context(|| format!("reading garage config {}", opt.garage.display()))?;

    let region_dir = opt.network_dir.join(&opt.region);
    let tables = NetworkTables::load(&region_dir)
        .with_context(|| format!("loading network tables for region {:?}", opt.region))?;
    let finder = DijkstraPathFinder::new(&tables).context("building path-finder")?;

    let trips = load_trips_csv(&opt.schedule)
        .with_context(|| format!("loading schedule {}", opt.schedule.display()))?;

    let mut config = SynthConfig::new(garage);
    config.speed_kmh = opt.speed_kmh;
    config.dwell_secs = opt.dwell_secs;

    let report = synthesize_routes(&trips, &finder, &config);
    log::info!(
        "synthesized {} of {} vehicles ({} skipped or failed)",
        report.routes.len(),
        trips.len(),
        report.failures.len(),
    );

    write_routes_json(&opt.out, &report.routes)
        .with_context(|| format!("writing {}", opt.out.display()))?;
    Ok(())
}
