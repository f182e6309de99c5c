//! Host page
//!
//! The download section and the release list, wrapped in a minimal document
//! whose `lang` attribute reflects the selected locale.

use crate::app::populate_downloads;
use crate::domain::entities::Release;

use super::downloads::render_download_buttons;
use super::i18n::Locale;
use super::markdown::escape_html;
use super::release_list::render_release_list;

pub fn render_page(releases: &[Release], locale: Locale) -> String {
    let strings = locale.strings();
    let buttons = populate_downloads(releases);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{releases_heading}</title></head>\n\
         <body>\n\
         <section id=\"download\"><h2>{downloads_heading}</h2>{buttons}</section>\n\
         <section id=\"releases\"><h2>{releases_heading}</h2>\
         <div id=\"releases-list\">{list}</div></section>\n\
         </body>\n\
         </html>\n",
        lang = locale.html_lang(),
        downloads_heading = escape_html(strings.downloads_heading),
        releases_heading = escape_html(strings.releases_heading),
        buttons = render_download_buttons(&buttons, locale),
        list = render_release_list(releases, locale),
    )
}
