use anyhow::Result;
use clap::Args;
use colored::Colorize;
use roadtrip_core::display::stop_rows;
use roadtrip_core::{DistanceUnit, JourneyDisplay, JourneyEvent, JourneyTracker};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::cli::Verbosity;
use crate::render;

/// Arguments for the `play` command
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Number of stops to advance from the origin before starting
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,
}

/// A line of input in the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayCommand {
    Next,
    ToggleUnit,
    Stops,
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse one input line. A blank line means `next`.
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Some(PlayCommand::Next),
            "u" | "unit" | "toggle" => Some(PlayCommand::ToggleUnit),
            "s" | "stops" => Some(PlayCommand::Stops),
            "h" | "help" | "?" => Some(PlayCommand::Help),
            "q" | "quit" | "exit" => Some(PlayCommand::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "Commands: [n]ext (or Enter), [u]nit toggle, [s]tops, [h]elp, [q]uit";

/// Step through the journey, one command per stdin line, until `quit` or EOF
pub async fn run(
    mut tracker: JourneyTracker,
    mut unit: DistanceUnit,
    verbosity: Verbosity,
    args: PlayArgs,
) -> Result<()> {
    let moved = tracker.advance_by(args.start);
    let mut events = tracker.subscribe();

    if verbosity != Verbosity::Quiet {
        println!("{}", HELP.dimmed());
    }
    drain_events(&mut events, &tracker, unit);
    if moved < args.start {
        println!("{}", "Journey completed!".green().bold());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match PlayCommand::parse(&line) {
            Some(PlayCommand::Next) => {
                tracker.advance();
            }
            Some(PlayCommand::ToggleUnit) => {
                unit = unit.toggle();
                println!("\nShowing distances in {}", unit.to_string().bold());
                render::print_dashboard(&JourneyDisplay::from_tracker(&tracker, unit));
            }
            Some(PlayCommand::Stops) => {
                println!();
                render::print_stop_list(&stop_rows(&tracker, unit));
            }
            Some(PlayCommand::Help) => println!("{}", HELP),
            Some(PlayCommand::Quit) => break,
            None => {
                eprintln!(
                    "{} Unknown command '{}'. {}",
                    "WARNING:".yellow().bold(),
                    line.trim(),
                    HELP
                );
            }
        }
        drain_events(&mut events, &tracker, unit);
    }

    Ok(())
}

/// Render every event the tracker has emitted since the last call.
fn drain_events(
    events: &mut mpsc::UnboundedReceiver<JourneyEvent>,
    tracker: &JourneyTracker,
    unit: DistanceUnit,
) {
    while let Ok(event) = events.try_recv() {
        match event {
            JourneyEvent::Initialized { .. } | JourneyEvent::Advanced { .. } => {
                println!();
                render::print_dashboard(&JourneyDisplay::from_tracker(tracker, unit));
            }
            JourneyEvent::Completed { stop } => {
                println!("\n{} {}", "Arrived at".green(), stop.green().bold());
            }
            JourneyEvent::AlreadyAtFinalStop { .. } => {
                println!("{}", "Journey completed!".green().bold());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(PlayCommand::parse(""), Some(PlayCommand::Next));
        assert_eq!(PlayCommand::parse("  N "), Some(PlayCommand::Next));
        assert_eq!(PlayCommand::parse("next"), Some(PlayCommand::Next));
        assert_eq!(PlayCommand::parse("u"), Some(PlayCommand::ToggleUnit));
        assert_eq!(PlayCommand::parse("toggle"), Some(PlayCommand::ToggleUnit));
        assert_eq!(PlayCommand::parse("stops"), Some(PlayCommand::Stops));
        assert_eq!(PlayCommand::parse("?"), Some(PlayCommand::Help));
        assert_eq!(PlayCommand::parse("q"), Some(PlayCommand::Quit));
        assert_eq!(PlayCommand::parse("exit"), Some(PlayCommand::Quit));
        assert_eq!(PlayCommand::parse("jump"), None);
    }
}
