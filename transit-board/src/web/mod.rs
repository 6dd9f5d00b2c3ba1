//! Local viewer for the rendered timeline.
//!
//! Serves a snapshot of one run: the console transcript and the timeline
//! SVG. Nothing is re-fetched while serving.

mod routes;
mod state;
pub mod templates;

use std::net::SocketAddr;

pub use routes::create_router;
pub use state::ViewerState;
pub use templates::IndexTemplate;

/// Serve the viewer on `addr` until the process is stopped.
pub async fn serve(addr: SocketAddr, state: ViewerState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state)).await
}
