//! Conversion from Digitransit DTOs to display-ready records.
//!
//! Arrival responses become a [`StopBoard`] keyed by route; plan
//! responses become domain itineraries plus their instruction text.

mod arrivals;
mod error;
mod itineraries;

pub use arrivals::{CollisionPolicy, NO_ROUTE, StopBoard, parse_arrivals};
pub use error::ParseError;
pub use itineraries::{ParsedPlan, instruction_line, parse_itineraries};
