use serde::Serialize;

use crate::tracker::JourneyTracker;
use crate::unit::DistanceUnit;

/// Label the distance from the origin to the current stop, in `unit`.
pub fn distance_covered_text(tracker: &JourneyTracker, unit: DistanceUnit) -> String {
    format!(
        "Distance Covered: {} {}",
        unit.format_value(tracker.distance_covered(unit)),
        unit
    )
}

/// Label the distance still to travel to the last stop, in `unit`.
pub fn distance_left_text(tracker: &JourneyTracker, unit: DistanceUnit) -> String {
    format!(
        "Distance Left: {} {}",
        unit.format_value(tracker.distance_remaining(unit)),
        unit
    )
}

/// Label a progress percentage for display.
pub fn progress_text(percent: u8) -> String {
    format!("Progress: {percent}%")
}

/// Everything a front end shows about a journey at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyDisplay {
    pub current_stop: String,
    pub next_stop: Option<String>,
    pub stop_index: usize,
    pub total_stops: usize,
    pub unit: DistanceUnit,
    pub distance_covered: f64,
    pub distance_left: f64,
    pub distance_covered_text: String,
    pub distance_left_text: String,
    pub progress_percent: u8,
    pub progress_text: String,
    pub completed: bool,
}

impl JourneyDisplay {
    pub fn from_tracker(tracker: &JourneyTracker, unit: DistanceUnit) -> Self {
        let percent = tracker.progress_percent();
        Self {
            current_stop: tracker.current_stop_name().to_string(),
            next_stop: tracker.next_stop().map(|s| s.name.clone()),
            stop_index: tracker.current_index(),
            total_stops: tracker.stops().len(),
            unit,
            distance_covered: tracker.distance_covered(unit),
            distance_left: tracker.distance_remaining(unit),
            distance_covered_text: distance_covered_text(tracker, unit),
            distance_left_text: distance_left_text(tracker, unit),
            progress_percent: percent,
            progress_text: progress_text(percent),
            completed: tracker.is_complete(),
        }
    }
}

/// One row of the stop list, for display enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRow {
    pub index: usize,
    pub name: String,
    pub distance: f64,
    pub unit: DistanceUnit,
    pub current: bool,
}

/// The tracker's stops with distances in `unit`, marking the current one.
pub fn stop_rows(tracker: &JourneyTracker, unit: DistanceUnit) -> Vec<StopRow> {
    tracker
        .stops()
        .iter()
        .enumerate()
        .map(|(index, stop)| StopRow {
            index,
            name: stop.name.clone(),
            distance: unit.convert(stop.distance),
            unit,
            current: index == tracker.current_index(),
        })
        .collect()
}
