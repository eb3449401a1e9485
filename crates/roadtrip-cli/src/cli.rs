use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use roadtrip_core::DistanceUnit;

use crate::commands::{play::PlayArgs, show::ShowArgs, stops::StopsArgs};

/// roadtrip: follow a simulated road trip one stop at a time
///
/// Tracks progress along a fixed list of stops and reports distance covered,
/// distance left and overall progress in kilometers or miles.
#[derive(Parser, Debug)]
#[command(name = "roadtrip", version, about, long_about = None)]
pub struct Cli {
    /// Increase output verbosity (show debug logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Route file (YAML, or JSON with a .json extension) to use instead of the built-in route
    #[arg(long, global = true, env = "ROADTRIP_ROUTE")]
    pub route: Option<PathBuf>,

    /// Unit to report distances in: km or miles (also kilometers, mi, mile)
    #[arg(
        short,
        long,
        global = true,
        default_value = "km",
        value_parser = clap::value_parser!(DistanceUnit)
    )]
    pub unit: DistanceUnit,

    #[command(subcommand)]
    pub command: Commands,
}

/// Verbosity level resolved from --verbose / --quiet flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// --quiet: only errors and essential output
    Quiet,
    /// default: normal output
    Normal,
    /// --verbose: extra debug info
    Verbose,
}

impl Cli {
    /// Resolve the verbosity level from CLI flags
    pub fn verbosity(&self) -> Verbosity {
        match (self.quiet, self.verbose) {
            (true, _) => Verbosity::Quiet,
            (_, true) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the journey dashboard: current stop, distances and progress
    Show(ShowArgs),

    /// List every stop on the route
    Stops(StopsArgs),

    /// Step through the journey interactively (reads commands from stdin)
    Play(PlayArgs),

    /// Generate shell completion scripts
    Completion(CompletionArgs),
}

/// Arguments for the `completion` command
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Commands {
    /// Whether the command writes machine-readable output to stdout.
    pub fn is_json(&self) -> bool {
        match self {
            Commands::Show(args) => args.json,
            Commands::Stops(args) => args.json,
            Commands::Play(_) | Commands::Completion(_) => false,
        }
    }
}
