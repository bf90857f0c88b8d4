//! Webhook routes for the notify service.
//!
//! ## Routes
//!
//! - `POST /push` - Consume one federation event payload
//! - `GET /health` - Health check (JSON)

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use mirador_core::FederationEvent;

use crate::format;
use crate::state::AppState;

/// Build the complete notify service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/push", post(push_handler))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Consume one push payload.
///
/// Always answers `204`; the notification is a fire-and-forget side effect.
/// Unrecognized schemas are ignored; sink failures are logged, not surfaced.
async fn push_handler(
    State(state): State<AppState>,
    Json(event): Json<FederationEvent>,
) -> StatusCode {
    match format::format_event(state.resolver.as_ref(), &state.config, &event).await {
        Some(notification) => {
            if let Err(err) = state.sink.deliver(&notification).await {
                tracing::warn!(error = %err, title = %notification.title, "notification delivery failed");
            }
        }
        None => {
            tracing::debug!("ignoring event with unrecognized schema");
        }
    }

    StatusCode::NO_CONTENT
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Public health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "mirador-notify",
        version: env!("CARGO_PKG_VERSION"),
    })
}
