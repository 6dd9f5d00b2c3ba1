//! Timeline layout.
//!
//! Maps the interval `[now, last_arrival]` linearly onto
//! `[padding, padding + window_size]` pixels. Row `r` (one per itinerary)
//! sits at `padding + r * (bar_height + bar_gap)`.

use std::fmt;

use chrono::TimeZone;

use crate::domain::{Itinerary, ItineraryLeg, TransitMode, format_epoch_ms};

use super::error::LayoutError;

/// One drawn leg.
///
/// # Invariants
///
/// - `x0 < x1` and `y0 < y1`
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub label: String,
    pub color: &'static str,
}

/// Per-itinerary text to the right of the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub x: f64,
    /// Vertical centre of the itinerary's row.
    pub y: f64,
    pub text: String,
}

/// Rectangle around the time axis area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A laid-out timeline, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub boxes: Vec<TimelineBox>,
    pub captions: Vec<Caption>,
    pub frame: Frame,
    pub width: f64,
    pub height: f64,
}

/// Geometry parameters, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    /// Margin around the time axis area
    pub padding: f64,
    /// Width of the time axis
    pub window_size: f64,
    /// Height of one itinerary row
    pub bar_height: f64,
    /// Vertical space between rows
    pub bar_gap: f64,
    /// Space between the time axis and the captions
    pub caption_gap: f64,
    /// Room reserved for captions
    pub caption_width: f64,
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self {
            padding: 20.0,
            window_size: 600.0,
            bar_height: 30.0,
            bar_gap: 10.0,
            caption_gap: 20.0,
            caption_width: 160.0,
        }
    }
}

/// Colour for a transport mode.
///
/// Only walk, bus, tram and rail/train have a colour; any other mode is
/// [`LayoutError::UnknownMode`].
pub fn mode_color(mode: &TransitMode) -> Result<&'static str, LayoutError> {
    match mode {
        TransitMode::Walk => Ok("grey"),
        TransitMode::Bus => Ok("blue"),
        TransitMode::Tram => Ok("green"),
        TransitMode::Rail | TransitMode::Train => Ok("violet"),
        TransitMode::Other(name) => Err(LayoutError::UnknownMode(name.clone())),
    }
}

impl TimelineLayout {
    /// Top edge of row `row`.
    pub fn row_top(&self, row: usize) -> f64 {
        self.padding + row as f64 * (self.bar_height + self.bar_gap)
    }

    /// Horizontal position of time `t` (seconds) on an axis starting at
    /// `now` and spanning `time_window` seconds.
    pub fn x_for(&self, t: f64, now: f64, time_window: f64) -> f64 {
        self.padding + self.window_size * (t - now) / time_window
    }

    /// Lay out itineraries against the current time `now` (epoch seconds).
    ///
    /// Walk legs are not drawn. Legs whose scaled width is not positive
    /// are dropped; legs before `now` land left of the axis and are kept.
    /// Caption start times are rendered in `tz`.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NoItineraries`] for an empty input
    /// - [`LayoutError::EmptyTimeWindow`] if the latest arrival is not
    ///   after `now`
    /// - [`LayoutError::UnknownMode`] for a drawn leg without a colour
    pub fn layout<Tz>(
        &self,
        itineraries: &[Itinerary],
        now: f64,
        tz: &Tz,
    ) -> Result<Timeline, LayoutError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let last_arrival_ms = itineraries
            .iter()
            .map(Itinerary::latest_end_ms)
            .max()
            .ok_or(LayoutError::NoItineraries)?;
        let last_arrival = last_arrival_ms as f64 / 1000.0;

        let time_window = last_arrival - now;
        if time_window.is_nan() || time_window <= 0.0 {
            return Err(LayoutError::EmptyTimeWindow { now, last_arrival });
        }

        let mut boxes = Vec::new();
        let mut captions = Vec::with_capacity(itineraries.len());

        for (row, itinerary) in itineraries.iter().enumerate() {
            let y0 = self.row_top(row);
            let y1 = y0 + self.bar_height;

            for leg in itinerary.vehicle_legs() {
                if let Some(b) = self.leg_box(leg, now, time_window, y0, y1)? {
                    boxes.push(b);
                }
            }

            captions.push(self.caption(itinerary, row, tz)?);
        }

        let rows = itineraries.len() as f64;
        let height = 2.0 * self.padding + rows * (self.bar_height + self.bar_gap);
        let width = 2.0 * self.padding + self.window_size + self.caption_width;

        Ok(Timeline {
            boxes,
            captions,
            frame: Frame {
                x0: self.padding,
                y0: self.padding,
                x1: self.padding + self.window_size,
                y1: height - self.padding,
            },
            width,
            height,
        })
    }

    fn leg_box(
        &self,
        leg: &ItineraryLeg,
        now: f64,
        time_window: f64,
        y0: f64,
        y1: f64,
    ) -> Result<Option<TimelineBox>, LayoutError> {
        let x0 = self.x_for(leg.start_secs(), now, time_window);
        let x1 = self.x_for(leg.end_secs(), now, time_window);

        if x0 >= x1 || y0 >= y1 {
            return Ok(None);
        }

        let label = leg
            .route_short_name
            .clone()
            .unwrap_or_else(|| leg.mode.to_string());

        Ok(Some(TimelineBox {
            x0,
            y0,
            x1,
            y1,
            label,
            color: mode_color(&leg.mode)?,
        }))
    }

    /// `"<HH:MM start>, <N> min"` at the row's vertical centre.
    fn caption<Tz>(&self, itinerary: &Itinerary, row: usize, tz: &Tz) -> Result<Caption, LayoutError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let start = format_epoch_ms(itinerary.first_leg().start_epoch_ms, tz, "%H:%M")?;
        Ok(Caption {
            x: self.padding + self.window_size + self.caption_gap,
            y: self.row_top(row) + self.bar_height / 2.0,
            text: format!("{start}, {} min", itinerary.total_duration_minutes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    /// 2024-03-15 08:00:00 UTC, in seconds
    const NOW: i64 = 1_710_489_600;

    fn leg(mode: TransitMode, start_s: i64, end_s: i64, route: Option<&str>) -> ItineraryLeg {
        ItineraryLeg {
            mode,
            start_epoch_ms: (NOW + start_s) * 1000,
            end_epoch_ms: (NOW + end_s) * 1000,
            from_name: "A".into(),
            to_name: "B".into(),
            route_short_name: route.map(str::to_string),
        }
    }

    fn itinerary(legs: Vec<ItineraryLeg>) -> Itinerary {
        Itinerary::new(legs).unwrap()
    }

    fn walk_bus_walk() -> Itinerary {
        itinerary(vec![
            leg(TransitMode::Walk, 0, 300, None),
            leg(TransitMode::Bus, 300, 900, Some("55")),
            leg(TransitMode::Walk, 900, 1000, None),
        ])
    }

    #[test]
    fn default_layout() {
        let layout = TimelineLayout::default();
        assert_eq!(layout.padding, 20.0);
        assert_eq!(layout.window_size, 600.0);
        assert_eq!(layout.bar_height, 30.0);
        assert_eq!(layout.bar_gap, 10.0);
    }

    #[test]
    fn scales_bus_leg_onto_window() {
        let layout = TimelineLayout::default();
        let timeline = layout
            .layout(&[walk_bus_walk()], NOW as f64, &Utc)
            .unwrap();

        // Walks are not drawn
        assert_eq!(timeline.boxes.len(), 1);
        let b = &timeline.boxes[0];

        // window = 1000 s onto 600 px
        assert_eq!(b.x0, 20.0 + 600.0 * 300.0 / 1000.0);
        assert_eq!(b.x1, 20.0 + 600.0 * 900.0 / 1000.0);
        assert_eq!((b.y0, b.y1), (20.0, 50.0));
        assert_eq!(b.label, "55");
        assert_eq!(b.color, "blue");
    }

    #[test]
    fn caption_per_itinerary() {
        let layout = TimelineLayout::default();
        let timeline = layout
            .layout(&[walk_bus_walk()], NOW as f64, &Utc)
            .unwrap();

        assert_eq!(timeline.captions.len(), 1);
        let c = &timeline.captions[0];
        assert_eq!(c.text, "08:00, 16 min");
        assert_eq!(c.x, 20.0 + 600.0 + 20.0);
        assert_eq!(c.y, 20.0 + 15.0);
    }

    #[test]
    fn rows_advance_even_without_boxes() {
        let layout = TimelineLayout::default();
        let walk_only = itinerary(vec![leg(TransitMode::Walk, 0, 500, None)]);
        let tram = itinerary(vec![leg(TransitMode::Tram, 100, 400, Some("4"))]);

        let timeline = layout
            .layout(&[walk_only, walk_bus_walk(), tram], NOW as f64, &Utc)
            .unwrap();

        assert_eq!(timeline.boxes.len(), 2);
        assert_eq!(timeline.boxes[0].y0, layout.row_top(1));
        assert_eq!(timeline.boxes[1].y0, layout.row_top(2));
        assert_eq!(timeline.boxes[1].y0, 20.0 + 2.0 * 40.0);
        assert_eq!(timeline.boxes[1].color, "green");
        assert_eq!(timeline.captions.len(), 3);
    }

    #[test]
    fn past_legs_are_not_clamped() {
        let layout = TimelineLayout::default();
        let it = itinerary(vec![
            leg(TransitMode::Bus, -200, 100, Some("1")),
            leg(TransitMode::Bus, 100, 1000, Some("2")),
        ]);

        let timeline = layout.layout(&[it], NOW as f64, &Utc).unwrap();
        assert_eq!(timeline.boxes.len(), 2);
        assert!(timeline.boxes[0].x0 < layout.padding);
        assert_eq!(timeline.boxes[0].x0, 20.0 + 600.0 * -200.0 / 1000.0);
    }

    #[test]
    fn degenerate_legs_are_dropped() {
        let layout = TimelineLayout::default();
        let it = itinerary(vec![
            leg(TransitMode::Bus, 100, 100, Some("zero")),
            leg(TransitMode::Bus, 300, 200, Some("backwards")),
            leg(TransitMode::Rail, 200, 1000, Some("P")),
        ]);

        let timeline = layout.layout(&[it], NOW as f64, &Utc).unwrap();
        assert_eq!(timeline.boxes.len(), 1);
        assert_eq!(timeline.boxes[0].label, "P");
        assert_eq!(timeline.boxes[0].color, "violet");
    }

    #[test]
    fn label_falls_back_to_mode() {
        let layout = TimelineLayout::default();
        let it = itinerary(vec![leg(TransitMode::Train, 0, 1000, None)]);

        let timeline = layout.layout(&[it], NOW as f64, &Utc).unwrap();
        assert_eq!(timeline.boxes[0].label, "TRAIN");
        assert_eq!(timeline.boxes[0].color, "violet");
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let layout = TimelineLayout::default();
        let it = itinerary(vec![leg(
            TransitMode::Other("FERRY".into()),
            0,
            1000,
            Some("19"),
        )]);

        let err = layout.layout(&[it], NOW as f64, &Utc).unwrap_err();
        assert_eq!(err, LayoutError::UnknownMode("FERRY".into()));
    }

    #[test]
    fn dropped_unknown_mode_needs_no_color() {
        let layout = TimelineLayout::default();
        let it = itinerary(vec![
            leg(TransitMode::Other("FERRY".into()), 100, 100, Some("19")),
            leg(TransitMode::Bus, 100, 1000, Some("55")),
        ]);

        let timeline = layout.layout(&[it], NOW as f64, &Utc).unwrap();
        assert_eq!(timeline.boxes.len(), 1);
        assert_eq!(timeline.boxes[0].label, "55");
    }

    #[test]
    fn elapsed_itineraries_are_rejected() {
        let layout = TimelineLayout::default();
        let now = (NOW + 2000) as f64;

        let err = layout.layout(&[walk_bus_walk()], now, &Utc).unwrap_err();
        assert_eq!(
            err,
            LayoutError::EmptyTimeWindow {
                now,
                last_arrival: (NOW + 1000) as f64,
            }
        );

        // Exactly zero width is rejected too
        let now = (NOW + 1000) as f64;
        assert!(matches!(
            layout.layout(&[walk_bus_walk()], now, &Utc),
            Err(LayoutError::EmptyTimeWindow { .. })
        ));
    }

    #[test]
    fn no_itineraries() {
        let layout = TimelineLayout::default();
        assert_eq!(
            layout.layout(&[], NOW as f64, &Utc).unwrap_err(),
            LayoutError::NoItineraries
        );
    }

    #[test]
    fn canvas_and_frame() {
        let layout = TimelineLayout::default();
        let timeline = layout
            .layout(&[walk_bus_walk(), walk_bus_walk()], NOW as f64, &Utc)
            .unwrap();

        assert_eq!(timeline.width, 20.0 * 2.0 + 600.0 + 160.0);
        assert_eq!(timeline.height, 20.0 * 2.0 + 2.0 * 40.0);
        assert_eq!(
            timeline.frame,
            Frame {
                x0: 20.0,
                y0: 20.0,
                x1: 620.0,
                y1: timeline.height - 20.0,
            }
        );
    }

    #[test]
    fn mode_colors() {
        assert_eq!(mode_color(&TransitMode::Walk), Ok("grey"));
        assert_eq!(mode_color(&TransitMode::Bus), Ok("blue"));
        assert_eq!(mode_color(&TransitMode::Tram), Ok("green"));
        assert_eq!(mode_color(&TransitMode::Rail), Ok("violet"));
        assert_eq!(mode_color(&TransitMode::Train), Ok("violet"));
        assert!(mode_color(&TransitMode::Other("SUBWAY".into())).is_err());
    }
}
