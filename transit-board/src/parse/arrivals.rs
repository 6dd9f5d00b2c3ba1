//! Stop arrival parsing.

use std::str::FromStr;

use crate::digitransit::{StopResponse, StoptimeDto};
use crate::domain::StopArrival;

use super::error::ParseError;

/// Route name used when a stoptime carries no trip or route data.
pub const NO_ROUTE: &str = "N/A";

/// What to keep when two arrivals share a route short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The later entry in the response replaces the earlier one. The
    /// route keeps the position where it was first seen.
    #[default]
    KeepLast,

    /// The entry with the smallest arrival offset is kept.
    KeepEarliest,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(CollisionPolicy::KeepLast),
            "earliest" => Ok(CollisionPolicy::KeepEarliest),
            other => Err(format!("unknown collision policy: {other}")),
        }
    }
}

/// Arrivals at one stop, one entry per route short name.
///
/// Entries are in order of first appearance in the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopBoard {
    pub stop_name: String,
    entries: Vec<StopArrival>,
}

impl StopBoard {
    fn new(stop_name: String) -> Self {
        Self {
            stop_name,
            entries: Vec::new(),
        }
    }

    /// Add an arrival, resolving a route collision with `policy`.
    fn insert(&mut self, arrival: StopArrival, policy: CollisionPolicy) {
        let existing = self
            .entries
            .iter_mut()
            .find(|e| e.route_short_name == arrival.route_short_name);

        match existing {
            None => self.entries.push(arrival),
            Some(slot) => match policy {
                CollisionPolicy::KeepLast => *slot = arrival,
                CollisionPolicy::KeepEarliest => {
                    if arrival.arrival_offset_seconds < slot.arrival_offset_seconds {
                        *slot = arrival;
                    }
                }
            },
        }
    }

    /// Arrival for a route, if any.
    #[cfg(test)]
    pub fn get(&self, route_short_name: &str) -> Option<&StopArrival> {
        self.entries
            .iter()
            .find(|e| e.route_short_name == route_short_name)
    }

    pub fn entries(&self) -> &[StopArrival] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a stop response into a [`StopBoard`] keyed by route short name.
///
/// Uses the realtime arrival of each stoptime. A stoptime without route
/// data is filed under [`NO_ROUTE`].
pub fn parse_arrivals(
    response: &StopResponse,
    policy: CollisionPolicy,
) -> Result<StopBoard, ParseError> {
    let data = response.data.as_ref().ok_or(ParseError::MissingData)?;
    let stop = data.stop.as_ref().ok_or(ParseError::StopNotFound)?;

    let mut board = StopBoard::new(stop.name.clone());
    for stoptime in &stop.stoptimes {
        board.insert(to_arrival(stoptime, &stop.name), policy);
    }

    Ok(board)
}

fn to_arrival(stoptime: &StoptimeDto, stop_name: &str) -> StopArrival {
    let route_short_name = stoptime
        .trip
        .as_ref()
        .and_then(|t| t.route.as_ref())
        .and_then(|r| r.short_name.clone())
        .unwrap_or_else(|| NO_ROUTE.to_string());

    StopArrival {
        route_short_name,
        arrival_offset_seconds: stoptime.realtime_arrival,
        stop_name: stop_name.to_string(),
        destination: stoptime.headsign.clone().unwrap_or_default(),
    }
}
