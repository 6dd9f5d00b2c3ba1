//! SVG rendering of a laid-out timeline.

use askama::Template;

use super::error::RenderError;
use super::layout::Timeline;

/// Approximate glyph width used to centre labels.
const CHAR_WIDTH: f64 = 7.0;

const FONT_SIZE: f64 = 12.0;

const CORNER_RADIUS: f64 = 6.0;

/// SVG document for a timeline.
#[derive(Template)]
#[template(path = "timeline.svg", escape = "html")]
pub struct TimelineSvg {
    pub width: String,
    pub height: String,
    pub frame_x: String,
    pub frame_y: String,
    pub frame_width: String,
    pub frame_height: String,
    pub corner_radius: String,
    pub font_size: String,
    pub boxes: Vec<TimelineBoxView>,
    pub captions: Vec<CaptionView>,
}

/// Box view model: rectangle plus label position.
#[derive(Debug, Clone)]
pub struct TimelineBoxView {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: String,
    pub label_y: String,
}

/// Caption view model.
#[derive(Debug, Clone)]
pub struct CaptionView {
    pub x: String,
    pub y: String,
    pub text: String,
}

/// Pixel coordinate as written to the document.
fn px(v: f64) -> String {
    format!("{v:.1}")
}

impl TimelineSvg {
    /// Build the view from a laid-out timeline.
    ///
    /// Labels are centred from their character count rather than measured
    /// text width.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let boxes = timeline
            .boxes
            .iter()
            .map(|b| {
                let chars = b.label.chars().count() as f64;
                TimelineBoxView {
                    x: px(b.x0),
                    y: px(b.y0),
                    width: px(b.x1 - b.x0),
                    height: px(b.y1 - b.y0),
                    color: b.color,
                    label: b.label.clone(),
                    label_x: px((b.x0 + b.x1) / 2.0 - chars * CHAR_WIDTH / 2.0),
                    label_y: px((b.y0 + b.y1) / 2.0 + FONT_SIZE / 3.0),
                }
            })
            .collect();

        let captions = timeline
            .captions
            .iter()
            .map(|c| CaptionView {
                x: px(c.x),
                y: px(c.y + FONT_SIZE / 3.0),
                text: c.text.clone(),
            })
            .collect();

        let frame = &timeline.frame;
        Self {
            width: px(timeline.width),
            height: px(timeline.height),
            frame_x: px(frame.x0),
            frame_y: px(frame.y0),
            frame_width: px(frame.x1 - frame.x0),
            frame_height: px(frame.y1 - frame.y0),
            corner_radius: px(CORNER_RADIUS),
            font_size: px(FONT_SIZE),
            boxes,
            captions,
        }
    }
}

/// Render a timeline as an SVG document.
pub fn render_svg(timeline: &Timeline) -> Result<String, RenderError> {
    Ok(TimelineSvg::from_timeline(timeline).render()?)
}
