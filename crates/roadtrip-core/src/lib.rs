//! Journey tracking for a simulated road trip.
//!
//! A [`JourneyTracker`] owns an ordered list of [`Stop`]s and a position that
//! only moves forward. Everything a front end shows (distances in either unit,
//! progress, the stop list) is derived from that position.

pub mod display;
pub mod error;
pub mod events;
pub mod route;
pub mod stop;
pub mod tracker;
pub mod unit;

pub use display::JourneyDisplay;
pub use error::JourneyError;
pub use events::JourneyEvent;
pub use stop::Stop;
pub use tracker::{Advance, JourneyTracker};
pub use unit::DistanceUnit;
