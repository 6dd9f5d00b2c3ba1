//! Itinerary plan parsing.

use std::fmt;

use chrono::TimeZone;

use crate::digitransit::{LegDto, PlanResponse};
use crate::domain::{Itinerary, ItineraryLeg, format_epoch_ms};

use super::arrivals::NO_ROUTE;
use super::error::ParseError;

/// A plan response flattened for display.
///
/// The three vectors are parallel: index `i` of each describes the same
/// itinerary, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    pub itineraries: Vec<Itinerary>,
    /// One instruction line per non-walk leg.
    pub instructions: Vec<Vec<String>>,
    /// Total duration in whole minutes, walks included.
    pub durations: Vec<i64>,
}

/// Flatten a plan response into itineraries, instructions and durations.
///
/// Leg start times in instruction lines are rendered in `tz`.
pub fn parse_itineraries<Tz>(response: &PlanResponse, tz: &Tz) -> Result<ParsedPlan, ParseError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let data = response.data.as_ref().ok_or(ParseError::MissingData)?;
    let plan = data.plan.as_ref().ok_or(ParseError::MissingPlan)?;

    let mut parsed = ParsedPlan {
        itineraries: Vec::with_capacity(plan.itineraries.len()),
        instructions: Vec::with_capacity(plan.itineraries.len()),
        durations: Vec::with_capacity(plan.itineraries.len()),
    };

    for dto in &plan.itineraries {
        let itinerary = Itinerary::new(dto.legs.iter().map(to_leg).collect())?;

        let lines = itinerary
            .vehicle_legs()
            .map(|leg| instruction_line(leg, tz))
            .collect::<Result<Vec<_>, _>>()?;

        parsed.durations.push(itinerary.total_duration_minutes());
        parsed.instructions.push(lines);
        parsed.itineraries.push(itinerary);
    }

    Ok(parsed)
}

/// Render one leg as `"<HH:MM:SS> <route> <from> -> <to> "`.
///
/// The route is [`NO_ROUTE`] when no vehicle is assigned. The trailing
/// space is part of the format.
pub fn instruction_line<Tz>(leg: &ItineraryLeg, tz: &Tz) -> Result<String, ParseError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let start = format_epoch_ms(leg.start_epoch_ms, tz, "%H:%M:%S")?;
    let route = leg.route_short_name.as_deref().unwrap_or(NO_ROUTE);
    Ok(format!(
        "{start} {route} {} -> {} ",
        leg.from_name, leg.to_name
    ))
}

fn to_leg(dto: &LegDto) -> ItineraryLeg {
    ItineraryLeg {
        mode: dto.mode.clone(),
        start_epoch_ms: dto.start_time,
        end_epoch_ms: dto.end_time,
        from_name: dto.from.name.clone(),
        to_name: dto.to.name.clone(),
        route_short_name: dto.trip.as_ref().and_then(|t| t.route_short_name.clone()),
    }
}
