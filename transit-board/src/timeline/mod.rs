//! Itinerary timeline graphic.
//!
//! [`TimelineLayout`] places each vehicle leg of each itinerary as a
//! rectangle on a shared horizontal time axis, one row per itinerary.
//! [`render_svg`] draws the result.

mod error;
mod layout;
mod render;

pub use error::{LayoutError, RenderError};
pub use layout::{Caption, Frame, Timeline, TimelineBox, TimelineLayout, mode_color};
pub use render::{CaptionView, TimelineBoxView, TimelineSvg, render_svg};
