//! Application state for the viewer.

use std::sync::Arc;

use crate::timeline::Timeline;

/// Shared viewer state: the snapshot being displayed.
#[derive(Clone)]
pub struct ViewerState {
    /// Laid-out itineraries
    pub timeline: Arc<Timeline>,

    /// Console output of the run
    pub transcript: Arc<str>,
}

impl ViewerState {
    /// Create a new viewer state.
    pub fn new(timeline: Timeline, transcript: impl Into<Arc<str>>) -> Self {
        Self {
            timeline: Arc::new(timeline),
            transcript: transcript.into(),
        }
    }
}
