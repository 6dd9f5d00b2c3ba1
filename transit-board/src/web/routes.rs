//! HTTP route handlers.

use axum::{Router, extract::State, routing::get};

use crate::timeline::TimelineSvg;

use super::state::ViewerState;
use super::templates::IndexTemplate;

/// Create the viewer router.
pub fn create_router(state: ViewerState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/timeline.svg", get(timeline_svg))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Page with the timeline and transcript.
async fn index_page(State(state): State<ViewerState>) -> IndexTemplate {
    IndexTemplate {
        transcript: state.transcript.to_string(),
        itinerary_count: state.timeline.captions.len(),
    }
}

/// The timeline as `image/svg+xml`.
async fn timeline_svg(State(state): State<ViewerState>) -> TimelineSvg {
    TimelineSvg::from_timeline(&state.timeline)
}
