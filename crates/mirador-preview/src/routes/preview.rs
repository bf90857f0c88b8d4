//! Main preview route handler.
//!
//! Handles `GET /{entity_id}/{message_id}`: cache check, the sequential
//! resolution chain (entity, message, effective profile), document assembly,
//! and the fire-and-forget cache write. Any failure along the chain renders
//! as a `301` to the platform home, never a 4xx/5xx.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::cache::CachedPage;
use crate::error::PreviewError;
use crate::render::{self, PreviewPage};
use crate::state::AppState;

/// Handle a preview request for one entity/message pair.
///
/// Steps, in order:
/// 1. Cache check; a hit skips the entire resolution chain
/// 2. Resolve entity, message, and effective profile (strictly sequential;
///    each step narrows the next)
/// 3. Extract media, sanitize, and render the OG document
/// 4. Store the document asynchronously and respond without waiting on the
///    write
pub async fn preview_handler(
    State(state): State<AppState>,
    Path((entity_id, message_id)): Path<(String, String)>,
) -> Response {
    let cache_key = format!(
        "{}/{entity_id}/{message_id}",
        state.config.public_origin
    );

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!(key = %cache_key, "cache hit");
        return html_response(&state, &cached.html);
    }

    tracing::debug!(key = %cache_key, "cache miss, resolving");

    match resolve_preview(&state, &entity_id, &message_id).await {
        Ok(page) => {
            let html = render::render_document(&page);

            // Fire-and-forget: writers for the same key may race; the last
            // one wins and all of them wrote byte-identical output.
            let cache = Arc::clone(&state.cache);
            let entry = CachedPage::new(html.clone());
            tokio::spawn(async move {
                cache.put(cache_key, entry).await;
            });

            html_response(&state, &html)
        }
        Err(err) => {
            tracing::info!(
                entity_id = %entity_id,
                message_id = %message_id,
                error = %err,
                "preview resolution failed, redirecting home"
            );
            redirect_home(&state)
        }
    }
}

/// Fallback for every path that is not exactly `/{entity_id}/{message_id}`
/// (or one of the fixed routes). Malformed shapes get the same redirect as a
/// resolution miss, and no upstream call is ever issued for them.
pub async fn malformed_path(State(state): State<AppState>) -> Response {
    redirect_home(&state)
}

/// Walk the resolution chain for one request.
async fn resolve_preview(
    state: &AppState,
    entity_id: &str,
    message_id: &str,
) -> Result<PreviewPage, PreviewError> {
    let resolver = &state.resolver;

    let entity = resolver
        .entity(entity_id)
        .await?
        .ok_or_else(|| PreviewError::UnknownEntity(entity_id.to_string()))?;

    let message = resolver
        .message(&entity.domain, entity_id, message_id)
        .await?
        .ok_or_else(|| PreviewError::MissingMessage(message_id.to_string()))?;

    // Profile-override precedence: a message posted under an alias displays
    // that profile, not the author's default one.
    let profile = match &message.document.profile_override {
        Some(override_ref) => {
            resolver
                .profile(&entity.domain, entity_id, &override_ref.profile_id)
                .await?
        }
        None => resolver.default_profile(&entity.domain, entity_id).await?,
    }
    .ok_or_else(|| PreviewError::MissingProfile(entity_id.to_string()))?;

    Ok(render::build_page(
        &state.config,
        entity_id,
        message_id,
        &message,
        &profile,
    ))
}

/// `301` to the platform home. The single degraded outcome for malformed
/// paths and every resolution failure.
fn redirect_home(state: &AppState) -> Response {
    let location = HeaderValue::from_str(&state.config.app_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("/"));
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Build the `200` HTML response with CDN cache headers and an ETag.
fn html_response(state: &AppState, html: &str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    let cache_value = format!("s-maxage={}", state.config.cache_ttl_secs);
    if let Ok(val) = HeaderValue::from_str(&cache_value) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, html.to_string()).into_response()
}
