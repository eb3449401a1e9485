use colored::Colorize;
use roadtrip_core::JourneyDisplay;
use roadtrip_core::display::StopRow;

/// Width (in characters) of the progress gauge, brackets excluded.
const GAUGE_WIDTH: usize = 30;

/// Build a progress gauge: `[=============>                ] 45%`
pub fn progress_gauge(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = GAUGE_WIDTH * percent / 100;
    let bar = if filled == GAUGE_WIDTH {
        "=".repeat(GAUGE_WIDTH)
    } else if filled == 0 {
        " ".repeat(GAUGE_WIDTH)
    } else {
        format!(
            "{}>{}",
            "=".repeat(filled - 1),
            " ".repeat(GAUGE_WIDTH - filled)
        )
    };
    format!("[{}] {:>3}%", bar.green(), percent)
}

/// Print the journey dashboard for one snapshot.
pub fn print_dashboard(display: &JourneyDisplay) {
    println!(
        "{} {}",
        format!("Stop {}/{}", display.stop_index + 1, display.total_stops).dimmed(),
        display.current_stop.cyan().bold()
    );
    match display.next_stop {
        Some(ref next) => println!("  Next stop: {}", next),
        None => println!("  {}", "Destination reached".green()),
    }
    println!("  {}", display.distance_covered_text);
    println!("  {}", display.distance_left_text);
    println!("  {}", progress_gauge(display.progress_percent));
    println!("  {}", display.progress_text.bold());
}

/// Print the stop list, highlighting the current stop.
pub fn print_stop_list(rows: &[StopRow]) {
    let number_width = rows.len().to_string().len();
    for row in rows {
        let number = format!("{:>width$}.", row.index + 1, width = number_width);
        let distance = format!(
            "({} {})",
            row.unit.format_value(row.distance),
            row.unit
        );
        if row.current {
            println!(
                "{} {} {} {}",
                ">".cyan().bold(),
                number,
                row.name.cyan().bold(),
                distance.dimmed()
            );
        } else {
            println!("  {} {} {}", number, row.name, distance.dimmed());
        }
    }
}
