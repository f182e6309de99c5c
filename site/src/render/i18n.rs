//! Localized strings and date formatting
//!
//! Two fixed string tables: English (the default) and Simplified Chinese.
//! The locale only changes which literals are substituted into rendered output.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;

/// Supported page locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Select a locale from a language tag; anything starting with `zh` is Chinese
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCn
        } else {
            Locale::En
        }
    }

    /// Value for the `lang` attribute of the host page
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::ZhCn => &ZH_CN,
        }
    }

    /// Long-form date: `January 5, 2025` or `2025年1月5日`
    pub fn format_long_date(self, date: NaiveDate) -> String {
        match self {
            Locale::En => date.format("%B %-d, %Y").to_string(),
            Locale::ZhCn => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        }
    }

    /// Format a `published_at` timestamp, keeping the raw text if it does not parse
    pub fn format_timestamp(self, raw: &str) -> String {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(ts) => self.format_long_date(ts.naive_utc().date()),
            Err(_) => raw.to_string(),
        }
    }
}

/// One string table
#[derive(Debug)]
pub struct Strings {
    pub no_release_notes: &'static str,
    pub untitled_release: &'static str,
    pub prerelease: &'static str,
    pub stable: &'static str,
    pub download_macos: &'static str,
    pub download_windows: &'static str,
    pub view_on_github: &'static str,
    pub unable_to_load: &'static str,
    pub no_release: &'static str,
    pub platform_unavailable: &'static str,
    pub downloads_heading: &'static str,
    pub releases_heading: &'static str,
}

pub static EN: Strings = Strings {
    no_release_notes: "No release notes provided.",
    untitled_release: "Untitled release",
    prerelease: "Pre-release",
    stable: "Stable",
    download_macos: "Download for macOS",
    download_windows: "Download for Windows",
    view_on_github: "View on GitHub",
    unable_to_load: "Unable to load releases right now. Please try again later.",
    no_release: "No release available yet.",
    platform_unavailable: "Not yet available for this platform.",
    downloads_heading: "Download",
    releases_heading: "Release notes",
};

pub static ZH_CN: Strings = Strings {
    no_release_notes: "暂无更新说明。",
    untitled_release: "未命名版本",
    prerelease: "预发布",
    stable: "正式版",
    download_macos: "下载 macOS 版",
    download_windows: "下载 Windows 版",
    view_on_github: "在 GitHub 上查看",
    unable_to_load: "暂时无法加载版本信息，请稍后再试。",
    no_release: "暂无可用版本。",
    platform_unavailable: "该平台暂未提供。",
    downloads_heading: "下载",
    releases_heading: "更新日志",
};
