mod cli;
mod commands;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, Verbosity};
use colored::Colorize;
use roadtrip_core::route::Route;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    logging::init(verbosity);

    // `completion` doesn't need a route, handle it early
    if let Commands::Completion(ref args) = cli.command {
        clap_complete::generate(
            args.shell,
            &mut <Cli as clap::CommandFactory>::command(),
            "roadtrip",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let route = match Route::load_or_builtin(cli.route.as_deref()) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("{} Failed to load route: {:#}", "ERROR".red().bold(), e);
            std::process::exit(1);
        }
    };
    let route_name = route.display_name();

    let tracker = match route.into_tracker() {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("{} {}", "ERROR".red().bold(), e);
            std::process::exit(1);
        }
    };

    let unit = cli.unit;

    if verbosity != Verbosity::Quiet && !cli.command.is_json() {
        println!(
            "{} {} {}",
            "roadtrip".cyan().bold(),
            route_name.bold(),
            format!(
                "({} stops, {} {})",
                tracker.stops().len(),
                unit.format_value(unit.convert(tracker.total_distance())),
                unit
            )
            .dimmed()
        );
    }

    let source = cli
        .route
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    tracing::debug!(%source, %unit, "Route loaded");

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(tracker, unit, args),
        Commands::Stops(args) => commands::stops::run(tracker, unit, args),
        Commands::Play(args) => commands::play::run(tracker, unit, verbosity, args).await,
        Commands::Completion(_) => unreachable!("completion handled above"),
    };

    if let Err(e) = result {
        eprintln!("\n{} {}", "FAILED".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}
