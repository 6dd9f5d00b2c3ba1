//! Digitransit API response DTOs.
//!
//! These types map directly to the GraphQL JSON responses for the two
//! queries built in `query.rs`. They use `Option` where the API sends
//! `null` for missing data.

use serde::Deserialize;

use crate::domain::TransitMode;

/// GraphQL response envelope.
///
/// A failed query returns HTTP 200 with `data: null` and a populated
/// `errors` array; partial failures may carry both.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Response to the stop arrival query.
pub type StopResponse = GraphQlResponse<StopData>;

/// Response to the itinerary plan query.
pub type PlanResponse = GraphQlResponse<PlanData>;

// ============================================================================
// Stop arrivals
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct StopData {
    /// `null` when the stop id is unknown.
    pub stop: Option<StopDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    /// Human-readable stop name.
    pub name: String,

    /// Upcoming visits, soonest first.
    #[serde(rename = "stoptimesWithoutPatterns", default)]
    pub stoptimes: Vec<StoptimeDto>,
}

/// One predicted or scheduled vehicle visit.
///
/// The board reads only `realtime_arrival`, `headsign` and the route. The
/// other fields are requested and decoded but unused.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoptimeDto {
    /// Scheduled arrival, seconds since the start of the service day.
    pub scheduled_arrival: Option<u32>,

    /// Realtime arrival, seconds since the start of the service day.
    /// Equals the scheduled time when no realtime data is available.
    pub realtime_arrival: u32,

    /// Whether the arrival is based on realtime data.
    #[serde(default)]
    pub realtime: bool,

    /// e.g. "SCHEDULED", "UPDATED", "CANCELED".
    pub realtime_state: Option<String>,

    /// Destination shown on the vehicle.
    pub headsign: Option<String>,

    pub trip: Option<StopTripDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopTripDto {
    pub route: Option<RouteDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub short_name: Option<String>,
}

// ============================================================================
// Itinerary plan
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PlanData {
    pub plan: Option<PlanDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanDto {
    #[serde(default)]
    pub itineraries: Vec<ItineraryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDto {
    /// Duration in seconds as computed by the router. Decoded but unused;
    /// displayed durations come from the first and last leg times.
    pub duration: Option<i64>,

    pub legs: Vec<LegDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub mode: TransitMode,

    /// Epoch milliseconds.
    pub start_time: i64,

    /// Epoch milliseconds.
    pub end_time: i64,

    pub from: PlaceDto,

    pub to: PlaceDto,

    /// `null` for walks and legs without an assigned vehicle.
    pub trip: Option<LegTripDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegTripDto {
    pub route_short_name: Option<String>,
}

impl<T> GraphQlResponse<T> {
    /// Error messages reported by the server.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

impl PlanResponse {
    /// Number of itineraries in the response, zero when the plan is absent.
    pub fn itinerary_count(&self) -> usize {
        self.data
            .as_ref()
            .and_then(|d| d.plan.as_ref())
            .map_or(0, |p| p.itineraries.len())
    }
}
