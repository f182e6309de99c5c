//! Release-list handler
//!
//! Supports content negotiation: Accept: application/json returns the cached
//! release list, otherwise the rendered `#releases-list` fragment.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::locale::resolve_locale;
use super::{wants_json, LangQuery};
use crate::domain::ports::ReleaseSource;
use crate::error::AppError;
use crate::render::render_release_list;
use crate::AppState;

/// GET /releases
pub async fn get_releases<RS>(
    State(state): State<AppState<RS>>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    RS: ReleaseSource + 'static,
{
    let locale = resolve_locale(query.lang.as_deref(), &headers, &state.default_lang)?;
    let releases = state.release_feed.fetch().await;

    if wants_json(&headers) {
        Ok(Json(&*releases).into_response())
    } else {
        Ok(Html(render_release_list(&releases, locale)).into_response())
    }
}
