//! Host page handler

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};

use super::locale::resolve_locale;
use super::LangQuery;
use crate::domain::ports::ReleaseSource;
use crate::error::AppError;
use crate::render::render_page;
use crate::AppState;

/// GET /
pub async fn get_page<RS>(
    State(state): State<AppState<RS>>,
    Query(query): Query<LangQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError>
where
    RS: ReleaseSource + 'static,
{
    let locale = resolve_locale(query.lang.as_deref(), &headers, &state.default_lang)?;
    let releases = state.release_feed.fetch().await;

    Ok(Html(render_page(&releases, locale)))
}
