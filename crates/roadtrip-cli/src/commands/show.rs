use anyhow::Result;
use clap::Args;
use colored::Colorize;
use roadtrip_core::{DistanceUnit, JourneyDisplay, JourneyTracker};

use crate::render;

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Number of stops to advance from the origin before showing
    #[arg(short, long, default_value_t = 0)]
    pub advance: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show the dashboard after advancing `args.advance` stops
pub fn run(mut tracker: JourneyTracker, unit: DistanceUnit, args: ShowArgs) -> Result<()> {
    let moved = tracker.advance_by(args.advance);
    let display = JourneyDisplay::from_tracker(&tracker, unit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&display)?);
        return Ok(());
    }

    render::print_dashboard(&display);
    if moved < args.advance {
        println!("\n{}", "Journey completed!".green().bold());
    }
    Ok(())
}
