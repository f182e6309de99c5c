//! Download-button renderer
//!
//! Every button and fallback element is always emitted; visibility is carried by
//! the `hidden` attribute so the page keeps the same element contract
//! (`#download-<platform>` with a `.version` child, `#no-release-<platform>`).

use crate::app::{ButtonState, DownloadButtons};
use crate::domain::entities::Platform;

use super::i18n::Locale;
use super::markdown::escape_html;

pub fn render_download_buttons(buttons: &DownloadButtons, locale: Locale) -> String {
    Platform::ALL
        .iter()
        .map(|&platform| render_button(platform, buttons.get(platform), locale))
        .collect()
}

fn render_button(platform: Platform, state: &ButtonState, locale: Locale) -> String {
    let strings = locale.strings();
    let slug = platform.slug();
    let label = match platform {
        Platform::MacOs => strings.download_macos,
        Platform::Windows => strings.download_windows,
    };

    let (href, version, button_hidden, fallback, fallback_hidden) = match state {
        ButtonState::Available { href, version } => (
            href.as_str(),
            version.as_str(),
            "",
            strings.platform_unavailable,
            " hidden",
        ),
        ButtonState::NoRelease => ("#", "", " hidden", strings.no_release, ""),
        ButtonState::Unavailable => ("#", "", " hidden", strings.platform_unavailable, ""),
    };

    format!(
        "<div class=\"download download-{slug}\">\
         <a id=\"download-{slug}\" class=\"download-button\" href=\"{href}\"{button_hidden}>\
         {label} <span class=\"version\">{version}</span></a>\
         <p id=\"no-release-{slug}\" class=\"no-release\"{fallback_hidden}>{fallback}</p>\
         </div>",
        href = escape_html(href),
        label = escape_html(label),
        version = escape_html(version),
        fallback = escape_html(fallback),
    )
}
