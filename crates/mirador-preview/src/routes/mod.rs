//! Route definitions for the preview service.
//!
//! ## Routes
//!
//! - `GET /` - Home page
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions
//! - `GET /{entity_id}/{message_id}` - Preview document
//! - anything else - `301` to the platform home (the path-shape gate)

mod health;
mod home;
mod preview;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete preview service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/{entity_id}/{message_id}", get(preview::preview_handler))
        .fallback(preview::malformed_path)
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Crawlers must be able to fetch these pages for link previews.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
