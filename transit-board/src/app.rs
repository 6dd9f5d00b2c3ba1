//! One pass of the board: arrivals, itineraries, timeline.
//!
//! Output order is fixed: stops in configured order, then itineraries in
//! response order. Arrival requests for all stops are issued together;
//! their results are consumed in order, so a failed stop still leaves the
//! boards of the stops before it printed.

use std::fmt;
use std::io::Write;

use chrono::{DateTime, TimeZone};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, ConfigError};
use crate::digitransit::{DigitransitError, PlanRequest, TransitApi, fetch_itineraries_settled};
use crate::parse::{ParseError, parse_arrivals, parse_itineraries};
use crate::report::{itinerary_block, stop_lines};
use crate::timeline::{LayoutError, RenderError, Timeline, TimelineLayout};

/// Top-level error for a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("arrivals for stop {stop_id}: {source}")]
    StopFetch {
        stop_id: String,
        #[source]
        source: DigitransitError,
    },

    #[error("arrivals for stop {stop_id}: {source}")]
    StopParse {
        stop_id: String,
        #[source]
        source: ParseError,
    },

    #[error("transit API error: {0}")]
    Api(#[from] DigitransitError),

    #[error("itinerary error: {0}")]
    Parse(#[from] ParseError),

    #[error("timeline layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("timeline render error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Laid-out itineraries, `None` when the plan had no itineraries.
    pub timeline: Option<Timeline>,
    /// Everything written to the console, newline-terminated lines.
    pub transcript: String,
}

/// Writes report lines to the console and keeps a copy.
struct Report<'a, W> {
    out: &'a mut W,
    transcript: String,
}

impl<W: Write> Report<'_, W> {
    fn line(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.transcript.push_str(line);
        self.transcript.push('\n');
        Ok(())
    }
}

/// Print arrival boards and itineraries to `out`, then lay out the timeline.
///
/// `now` sets the planning date and time, the time zone for rendered
/// clock times, and the left edge of the timeline.
pub async fn run<A, Tz, W>(
    api: &A,
    config: &AppConfig,
    now: DateTime<Tz>,
    out: &mut W,
) -> Result<RunOutput, AppError>
where
    A: TransitApi,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    W: Write,
{
    let mut report = Report {
        out,
        transcript: String::new(),
    };

    debug!(stops = config.stops.len(), "fetching arrivals");
    let responses = join_all(config.stops.iter().map(|id| api.fetch_arrivals(id))).await;

    for (stop_id, response) in config.stops.iter().zip(responses) {
        let response = response.map_err(|source| AppError::StopFetch {
            stop_id: stop_id.clone(),
            source,
        })?;
        let board = parse_arrivals(&response, config.collision_policy).map_err(|source| {
            AppError::StopParse {
                stop_id: stop_id.clone(),
                source,
            }
        })?;

        if board.is_empty() {
            warn!(stop_id, stop = %board.stop_name, "no upcoming arrivals");
        }
        debug!(stop_id, routes = board.len(), "parsed arrivals");
        for line in stop_lines(&board) {
            report.line(&line)?;
        }
        report.line("")?;
    }

    let request = PlanRequest::departing_at(config.home, config.destination, now.naive_local());
    let response = fetch_itineraries_settled(api, &request, &config.polling).await?;

    let tz = now.timezone();
    let plan = parse_itineraries(&response, &tz)?;
    info!(itineraries = plan.itineraries.len(), "plan received");

    for (i, (instructions, duration)) in plan.instructions.iter().zip(&plan.durations).enumerate() {
        for line in itinerary_block(i + 1, *duration, instructions) {
            report.line(&line)?;
        }
        report.line("")?;
    }

    let timeline = if plan.itineraries.is_empty() {
        warn!("no itineraries, skipping timeline");
        None
    } else {
        let now_secs = now.timestamp_millis() as f64 / 1000.0;
        Some(TimelineLayout::default().layout(&plan.itineraries, now_secs, &tz)?)
    };

    Ok(RunOutput {
        timeline,
        transcript: report.transcript,
    })
}
