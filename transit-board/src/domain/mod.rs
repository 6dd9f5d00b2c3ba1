//! Domain types for the transit board.
//!
//! This module contains validated value types built from Digitransit
//! responses. Types that carry invariants enforce them at construction
//! time, so code that receives them can trust their validity.

mod arrival;
mod coords;
mod error;
mod itinerary;
mod mode;
mod time;

pub use arrival::{StopArrival, format_eta};
pub use coords::Coordinates;
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryLeg};
pub use mode::TransitMode;
pub use time::{TimeError, format_epoch_ms};
