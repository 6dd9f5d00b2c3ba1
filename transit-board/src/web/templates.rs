//! Askama templates for the viewer.

use askama::Template;

/// Viewer page: timeline image above the console transcript.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub transcript: String,
    pub itinerary_count: usize,
}
