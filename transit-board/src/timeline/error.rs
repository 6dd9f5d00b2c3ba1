//! Timeline error types.

use crate::domain::TimeError;

/// Errors from laying out a timeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Nothing to lay out
    #[error("no itineraries to lay out")]
    NoItineraries,

    /// Latest arrival is not after `now`, so the time axis has no width
    #[error("empty time window: latest arrival {last_arrival} is not after now {now}")]
    EmptyTimeWindow { now: f64, last_arrival: f64 },

    /// Leg mode has no assigned colour
    #[error("no colour for transport mode {0}")]
    UnknownMode(String),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Errors from rendering a timeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}
