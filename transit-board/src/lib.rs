//! Transit board.
//!
//! Prints upcoming arrivals at a set of stops and the planner's
//! itineraries between two fixed places, then draws the itineraries as a
//! timeline: one row per itinerary, one bar per vehicle leg.

pub mod app;
pub mod config;
pub mod digitransit;
pub mod domain;
pub mod parse;
pub mod report;
pub mod timeline;
pub mod web;
