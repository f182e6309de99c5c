//! Download-buttons handler

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::locale::resolve_locale;
use super::{wants_json, LangQuery};
use crate::app::populate_downloads;
use crate::domain::ports::ReleaseSource;
use crate::error::AppError;
use crate::render::render_download_buttons;
use crate::AppState;

/// GET /downloads
///
/// - Accept: application/json → button states
/// - Otherwise → the rendered buttons and their fallbacks
pub async fn get_downloads<RS>(
    State(state): State<AppState<RS>>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    RS: ReleaseSource + 'static,
{
    let locale = resolve_locale(query.lang.as_deref(), &headers, &state.default_lang)?;
    let releases = state.release_feed.fetch().await;
    let buttons = populate_downloads(&releases);

    if wants_json(&headers) {
        Ok(Json(buttons).into_response())
    } else {
        Ok(Html(render_download_buttons(&buttons, locale)).into_response())
    }
}
