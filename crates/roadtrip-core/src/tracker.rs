use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::JourneyError;
use crate::events::JourneyEvent;
use crate::stop::Stop;
use crate::unit::DistanceUnit;

/// Result of a call to [`JourneyTracker::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The position moved from one stop index to the next.
    Moved { from: usize, to: usize },
    /// Already at the last stop; the tracker is unchanged.
    AlreadyAtFinalStop,
}

impl Advance {
    pub fn moved(self) -> bool {
        matches!(self, Advance::Moved { .. })
    }
}

/// Position along a fixed, ordered list of stops.
///
/// The stop list never changes after construction and the current index only
/// moves forward, one stop at a time. All distances and the progress value are
/// derived from the current index on demand, so they can never disagree with it.
///
/// `advance` takes `&mut self`; share a tracker across threads behind a `Mutex`.
#[derive(Debug)]
pub struct JourneyTracker {
    stops: Vec<Stop>,
    current: usize,
    total_distance: u32,
    subscribers: Vec<mpsc::UnboundedSender<JourneyEvent>>,
}

impl JourneyTracker {
    /// Build a tracker positioned at the first stop.
    ///
    /// The list must be non-empty, start at distance 0, have non-decreasing
    /// distances and no blank names. Names are trimmed.
    pub fn new(stops: Vec<Stop>) -> Result<Self, JourneyError> {
        let stops = validate(stops)?;
        let total_distance = stops.last().map(|s| s.distance).unwrap_or_default();

        debug!(
            stops = stops.len(),
            total_distance, "Journey initialized at '{}'", stops[0].name
        );

        Ok(Self {
            stops,
            current: 0,
            total_distance,
            subscribers: Vec::new(),
        })
    }

    /// Register for change notifications.
    ///
    /// The receiver immediately holds an [`JourneyEvent::Initialized`] event
    /// describing the current position, so a subscriber can draw its first
    /// frame without querying the tracker separately.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<JourneyEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        if tx.send(self.initialized_event()).is_ok() {
            self.subscribers.push(tx);
        }
        rx
    }

    /// Move to the next stop, or report that the journey is already complete.
    pub fn advance(&mut self) -> Advance {
        if self.is_complete() {
            info!("Journey completed! Already at '{}'", self.current_stop().name);
            self.emit(JourneyEvent::AlreadyAtFinalStop {
                stop: self.current_stop().name.clone(),
            });
            return Advance::AlreadyAtFinalStop;
        }

        let from = self.current;
        self.current += 1;
        let stop = self.current_stop().name.clone();
        debug!(from, to = self.current, "Advanced to '{}'", stop);

        self.emit(JourneyEvent::Advanced {
            from,
            to: self.current,
            stop: stop.clone(),
        });
        if self.is_complete() {
            info!("Reached final stop '{}'", stop);
            self.emit(JourneyEvent::Completed { stop });
        }

        Advance::Moved {
            from,
            to: self.current,
        }
    }

    /// Advance up to `count` times, stopping early at the last stop.
    ///
    /// Returns the number of stops actually moved. A request that runs past the
    /// end reports the final no-op advance like [`Self::advance`] does.
    pub fn advance_by(&mut self, count: usize) -> usize {
        let mut moved = 0;
        for _ in 0..count {
            if !self.advance().moved() {
                break;
            }
            moved += 1;
        }
        moved
    }

    /// Distance from the origin to the current stop.
    pub fn distance_covered(&self, unit: DistanceUnit) -> f64 {
        unit.convert(self.current_stop().distance)
    }

    /// Distance from the current stop to the last stop. Never negative.
    pub fn distance_remaining(&self, unit: DistanceUnit) -> f64 {
        unit.convert(self.total_distance - self.current_stop().distance)
    }

    /// Share of stops passed, as a whole percentage in `0..=100`.
    ///
    /// Uses the stop index, not the distance, and rounds to the nearest
    /// integer. A single-stop journey is always at 100.
    pub fn progress_percent(&self) -> u8 {
        let last = self.stops.len() - 1;
        if last == 0 {
            return 100;
        }
        (self.current as f64 / last as f64 * 100.0).round() as u8
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_stop(&self) -> &Stop {
        &self.stops[self.current]
    }

    pub fn current_stop_name(&self) -> &str {
        &self.current_stop().name
    }

    /// The stop after the current one, if any.
    pub fn next_stop(&self) -> Option<&Stop> {
        self.stops.get(self.current + 1)
    }

    /// All stops in journey order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Distance of the last stop, in kilometers.
    pub fn total_distance(&self) -> u32 {
        self.total_distance
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.stops.len() - 1
    }

    fn initialized_event(&self) -> JourneyEvent {
        JourneyEvent::Initialized {
            stop: self.current_stop().name.clone(),
            index: self.current,
            total_stops: self.stops.len(),
        }
    }

    /// Send an event to every live subscriber, dropping those whose receiver is gone.
    fn emit(&mut self, event: JourneyEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn validate(stops: Vec<Stop>) -> Result<Vec<Stop>, JourneyError> {
    if stops.is_empty() {
        return Err(JourneyError::invalid("stop list is empty"));
    }

    let stops: Vec<Stop> = stops
        .into_iter()
        .map(|s| Stop::new(s.name.trim(), s.distance))
        .collect();

    if stops[0].distance != 0 {
        return Err(JourneyError::invalid(format!(
            "first stop '{}' must be at distance 0, found {}",
            stops[0].name, stops[0].distance
        )));
    }

    for (i, stop) in stops.iter().enumerate() {
        if stop.name.is_empty() {
            return Err(JourneyError::invalid(format!("stop #{} has no name", i + 1)));
        }
    }

    if let Some(pair) = stops.windows(2).find(|w| w[1].distance < w[0].distance) {
        return Err(JourneyError::invalid(format!(
            "stop '{}' ({} km) comes before '{}' but is farther ({} km)",
            pair[0].name, pair[0].distance, pair[1].name, pair[1].distance
        )));
    }

    Ok(stops)
}
