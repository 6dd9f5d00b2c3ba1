//! Digitransit routing API client.
//!
//! This module provides an HTTP client for the Digitransit GraphQL API
//! (HSL router), which serves stop arrival predictions and itinerary plans.
//!
//! Key characteristics of the API:
//! - A single GraphQL endpoint, POST only, body `{"query": "..."}`
//! - Authentication is a static `digitransit-subscription-key` header
//! - Errors inside a query come back as HTTP 200 with an `errors` array
//! - Stoptime arrivals are seconds since the start of the service day;
//!   leg times are epoch milliseconds

mod client;
mod error;
mod mock;
mod poll;
mod query;
mod types;

use std::future::Future;

pub use client::{DigitransitClient, DigitransitConfig};
pub use error::DigitransitError;
pub use mock::MockDigitransitClient;
pub use poll::{PlanPolling, fetch_itineraries_settled};
pub use query::{PlanRequest, plan_query, stop_query};
pub use types::{
    GraphQlError, GraphQlResponse, ItineraryDto, LegDto, LegTripDto, PlaceDto, PlanData, PlanDto,
    PlanResponse, RouteDto, StopData, StopDto, StopResponse, StopTripDto, StoptimeDto,
};

/// Source of raw transit responses.
///
/// Implemented by the live [`DigitransitClient`] and by
/// [`MockDigitransitClient`] for running without an API key.
pub trait TransitApi {
    /// Fetch upcoming arrivals at a stop.
    fn fetch_arrivals(
        &self,
        stop_id: &str,
    ) -> impl Future<Output = Result<StopResponse, DigitransitError>> + Send;

    /// Fetch candidate itineraries for a planning request.
    fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> impl Future<Output = Result<PlanResponse, DigitransitError>> + Send;
}
