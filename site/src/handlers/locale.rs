//! Locale selection for requests
//!
//! Order: `?lang=` query parameter, first `Accept-Language` tag, configured default.

use axum::http::{header, HeaderMap};

use crate::error::AppError;
use crate::render::Locale;

pub fn resolve_locale(
    query_lang: Option<&str>,
    headers: &HeaderMap,
    default_lang: &str,
) -> Result<Locale, AppError> {
    if let Some(lang) = query_lang {
        if !is_language_tag(lang) {
            return Err(AppError::BadRequest(format!(
                "lang must be a language tag, got {:?}",
                lang
            )));
        }
        return Ok(Locale::from_tag(lang));
    }

    let preferred = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(first_language);

    Ok(Locale::from_tag(preferred.unwrap_or(default_lang)))
}

/// First concrete tag of an `Accept-Language` value, ignoring quality weights
fn first_language(value: &str) -> Option<&str> {
    value
        .split(',')
        .map(|part| part.split(';').next().unwrap_or("").trim())
        .find(|tag| !tag.is_empty() && *tag != "*")
}

fn is_language_tag(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 35
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
