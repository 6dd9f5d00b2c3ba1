//! Itinerary and leg types.
//!
//! An `Itinerary` is one complete journey option from origin to
//! destination, made of ordered `ItineraryLeg`s.

use super::{DomainError, TransitMode};

/// One uninterrupted segment of travel by a single mode.
///
/// `start_epoch_ms < end_epoch_ms` is expected from upstream data and is
/// not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryLeg {
    pub mode: TransitMode,
    pub start_epoch_ms: i64,
    pub end_epoch_ms: i64,
    pub from_name: String,
    pub to_name: String,
    /// Route short name, absent when no vehicle is assigned (walks, transfers).
    pub route_short_name: Option<String>,
}

impl ItineraryLeg {
    /// Start time in seconds since the epoch.
    pub fn start_secs(&self) -> f64 {
        self.start_epoch_ms as f64 / 1000.0
    }

    /// End time in seconds since the epoch.
    pub fn end_secs(&self) -> f64 {
        self.end_epoch_ms as f64 / 1000.0
    }

    /// Returns true for walking legs.
    pub fn is_walk(&self) -> bool {
        self.mode.is_walk()
    }
}

/// A complete journey option.
///
/// # Invariants
///
/// - At least one leg
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<ItineraryLeg>,
}

impl Itinerary {
    /// Construct an itinerary, rejecting an empty leg list.
    pub fn new(legs: Vec<ItineraryLeg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Returns the first leg (guaranteed present).
    pub fn first_leg(&self) -> &ItineraryLeg {
        &self.legs[0]
    }

    /// Returns the last leg (guaranteed present).
    pub fn last_leg(&self) -> &ItineraryLeg {
        &self.legs[self.legs.len() - 1]
    }

    /// Legs that ride a vehicle, i.e. everything except walks.
    pub fn vehicle_legs(&self) -> impl Iterator<Item = &ItineraryLeg> {
        self.legs.iter().filter(|leg| !leg.is_walk())
    }

    /// Latest end time over all legs, in epoch milliseconds.
    pub fn latest_end_ms(&self) -> i64 {
        self.legs
            .iter()
            .map(|leg| leg.end_epoch_ms)
            .max()
            .unwrap_or(self.last_leg().end_epoch_ms)
    }

    /// Whole minutes from the first leg's start to the last leg's end.
    ///
    /// Walking legs at either end are part of the span. Partial minutes
    /// are truncated.
    pub fn total_duration_minutes(&self) -> i64 {
        (self.last_leg().end_epoch_ms - self.first_leg().start_epoch_ms) / 60_000
    }
}
