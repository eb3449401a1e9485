use anyhow::Result;
use clap::Args;
use colored::Colorize;
use roadtrip_core::display::stop_rows;
use roadtrip_core::{DistanceUnit, JourneyTracker};

use crate::render;

/// Arguments for the `stops` command
#[derive(Args, Debug)]
pub struct StopsArgs {
    /// Mark the stop reached after advancing this many stops from the origin
    #[arg(short, long, default_value_t = 0)]
    pub advance: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List the stops on the route
pub fn run(mut tracker: JourneyTracker, unit: DistanceUnit, args: StopsArgs) -> Result<()> {
    tracker.advance_by(args.advance);
    let rows = stop_rows(&tracker, unit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} stops, {} {} in total",
            rows.len(),
            unit.format_value(unit.convert(tracker.total_distance())),
            unit
        )
        .dimmed()
    );
    render::print_stop_list(&rows);
    Ok(())
}
