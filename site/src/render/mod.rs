//! Rendering
//!
//! HTML fragments for the release list, the download buttons and the host page.

pub mod downloads;
pub mod i18n;
pub mod markdown;
pub mod page;
pub mod release_list;

pub use downloads::render_download_buttons;
pub use i18n::Locale;
pub use page::render_page;
pub use release_list::render_release_list;
