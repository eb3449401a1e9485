/// Events emitted by a [`crate::JourneyTracker`] whenever its position changes.
///
/// These decouple the tracker from whatever presents it: a front end
/// subscribes once and redraws when an event arrives instead of polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyEvent {
    /// The tracker was built and sits at the first stop.
    Initialized {
        stop: String,
        index: usize,
        total_stops: usize,
    },
    /// The position moved forward by one stop.
    Advanced {
        from: usize,
        to: usize,
        stop: String,
    },
    /// The final stop has just been reached.
    Completed { stop: String },
    /// An advance was requested while already at the final stop; nothing changed.
    AlreadyAtFinalStop { stop: String },
}
