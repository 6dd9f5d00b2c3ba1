//! GraphQL query construction.
//!
//! Both queries are plain strings. Every input, including the planning
//! date and time, is an explicit argument so the output depends only on
//! what the caller passes in.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::Coordinates;

/// Maximum number of itineraries requested from the planner.
pub const NUM_ITINERARIES: u8 = 5;

/// Parameters for an itinerary plan query.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    /// Service date to plan for
    pub date: NaiveDate,
    /// Earliest departure time
    pub time: NaiveTime,
}

impl PlanRequest {
    /// Plan a journey departing at the given local date and time.
    pub fn departing_at(origin: Coordinates, destination: Coordinates, at: NaiveDateTime) -> Self {
        Self {
            origin,
            destination,
            date: at.date(),
            time: at.time(),
        }
    }
}

/// Build the stop arrival query for `stop_id`, e.g. `"HSL:1040129"`.
pub fn stop_query(stop_id: &str) -> String {
    format!(
        r#"{{
    stop(id: "{id}") {{
        name
        stoptimesWithoutPatterns {{
            scheduledArrival
            realtimeArrival
            realtime
            realtimeState
            headsign
            trip {{
                route {{
                    shortName
                }}
            }}
        }}
    }}
}}"#,
        id = escape_string(stop_id)
    )
}

/// Build the itinerary plan query.
///
/// Fixed parameters: five itineraries, modes bus/rail/tram/walk, walk
/// reluctance 1.0, walk board cost 120 s, minimum transfer 60 s and walk
/// speed 2.0 m/s.
pub fn plan_query(request: &PlanRequest) -> String {
    format!(
        r#"{{
    plan(
        from: {{lat: {from_lat}, lon: {from_lon}}},
        to: {{lat: {to_lat}, lon: {to_lon}}},
        date: "{date}",
        time: "{time}",
        numItineraries: {num},
        transportModes: [{{mode: BUS}}, {{mode: RAIL}}, {{mode: TRAM}}, {{mode: WALK}}],
        walkReluctance: 1.0,
        walkBoardCost: 120,
        minTransferTime: 60,
        walkSpeed: 2.0,
    ) {{
        itineraries {{
            duration
            legs {{
                mode
                startTime
                endTime
                from {{
                    name
                }}
                to {{
                    name
                }}
                trip {{
                    routeShortName
                }}
            }}
        }}
    }}
}}"#,
        from_lat = request.origin.lat(),
        from_lon = request.origin.lon(),
        to_lat = request.destination.lat(),
        to_lon = request.destination.lon(),
        date = request.date.format("%Y-%m-%d"),
        time = request.time.format("%H:%M:%S"),
        num = NUM_ITINERARIES,
    )
}

/// Escape a value for use inside a GraphQL string literal.
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
