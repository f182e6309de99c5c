//! Release-list renderer
//!
//! Renders one `<article>` per release, in feed order.

use crate::app::select_latest;
use crate::domain::entities::{Platform, Release};

use super::i18n::Locale;
use super::markdown::{escape_html, render_markdown};

/// Render the contents of the `#releases-list` container.
///
/// An empty feed (no releases, or a failed fetch) renders the "unable to load"
/// message instead of any articles.
pub fn render_release_list(releases: &[Release], locale: Locale) -> String {
    let strings = locale.strings();

    if releases.is_empty() {
        return format!(
            "<p class=\"releases-empty\">{}</p>",
            escape_html(strings.unable_to_load)
        );
    }

    let latest = select_latest(releases);

    let mut buf = String::new();
    for release in releases {
        let is_latest = latest.is_some_and(|l| std::ptr::eq(l, release));
        buf.push_str(&render_release(release, is_latest, locale));
    }
    buf
}

fn render_release(release: &Release, is_latest: bool, locale: Locale) -> String {
    let strings = locale.strings();

    let title = release.title().unwrap_or(strings.untitled_release);

    let date = release
        .published_at
        .as_deref()
        .map(|raw| {
            format!(
                "<time datetime=\"{}\">{}</time>",
                escape_html(raw),
                escape_html(&locale.format_timestamp(raw))
            )
        })
        .unwrap_or_default();

    let badge = if release.prerelease {
        format!(
            "<span class=\"badge badge-prerelease\">{}</span>",
            escape_html(strings.prerelease)
        )
    } else {
        format!(
            "<span class=\"badge badge-stable\">{}</span>",
            escape_html(strings.stable)
        )
    };

    let mut links = String::new();
    for platform in Platform::ALL {
        if let Some(asset) = release.asset_for(platform) {
            let label = match platform {
                Platform::MacOs => strings.download_macos,
                Platform::Windows => strings.download_windows,
            };
            links.push_str(&format!(
                "<a class=\"release-download release-download-{}\" href=\"{}\">{}</a>",
                platform.slug(),
                escape_html(&asset.browser_download_url),
                escape_html(label)
            ));
        }
    }
    links.push_str(&format!(
        "<a class=\"release-source\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
        escape_html(&release.html_url),
        escape_html(strings.view_on_github)
    ));

    let class = if is_latest {
        "release release-latest"
    } else {
        "release"
    };

    format!(
        "<article class=\"{class}\" id=\"release-{id}\">\
         <header><h3 class=\"release-title\">{title}</h3>\
         <div class=\"release-meta\">{date}{badge}</div></header>\
         <div class=\"release-body\">{body}</div>\
         <div class=\"release-links\">{links}</div>\
         </article>",
        id = escape_html(&release.tag_name),
        title = escape_html(title),
        body = render_markdown(release.body.as_deref(), strings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_asset, test_prerelease, test_release, test_release_with_installers};

    #[test]
    fn empty_feed_shows_unable_to_load() {
        let html = render_release_list(&[], Locale::En);

        assert_eq!(
            html,
            "<p class=\"releases-empty\">Unable to load releases right now. Please try again later.</p>"
        );
        assert!(!html.contains("<article"));
    }

    #[test]
    fn empty_feed_localized() {
        let html = render_release_list(&[], Locale::ZhCn);

        assert!(html.contains("暂时无法加载版本信息"));
    }

    #[test]
    fn one_article_per_release_in_order() {
        let releases = vec![
            test_prerelease("v3.0.0-beta"),
            test_release("v2.0.0"),
            test_release("v1.0.0"),
        ];

        let html = render_release_list(&releases, Locale::En);

        assert_eq!(html.matches("<article").count(), 3);
        let first = html.find("release-v3.0.0-beta").unwrap();
        let second = html.find("release-v2.0.0").unwrap();
        let third = html.find("release-v1.0.0").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn full_article() {
        let release = test_release_with_installers("v1.2.0");

        let html = render_release_list(&[release], Locale::En);

        assert!(html.contains("<h3 class=\"release-title\">Snapper v1.2.0</h3>"));
        assert!(html.contains("<time datetime=\"2025-01-05T12:00:00Z\">January 5, 2025</time>"));
        assert!(html.contains("<span class=\"badge badge-stable\">Stable</span>"));
        assert!(html.contains(
            "<h3>Highlights</h3><ul><li>Faster capture</li><li><strong>New</strong> editor</li></ul>"
        ));
        assert!(html.contains(
            "<a class=\"release-download release-download-macos\" href=\"https://downloads.test/Snapper-v1.2.0.dmg\">Download for macOS</a>"
        ));
        assert!(html.contains(
            "<a class=\"release-download release-download-windows\" href=\"https://downloads.test/Snapper-v1.2.0-Setup.exe\">Download for Windows</a>"
        ));
        assert!(html.contains(
            "<a class=\"release-source\" href=\"https://github.com/acme/snapper/releases/tag/v1.2.0\" target=\"_blank\" rel=\"noopener\">View on GitHub</a>"
        ));
        assert!(html.contains("class=\"release release-latest\""));
    }

    #[test]
    fn prerelease_badge_and_chinese_date() {
        let html = render_release_list(&[test_prerelease("v2.0.0-rc1")], Locale::ZhCn);

        assert!(html.contains("<span class=\"badge badge-prerelease\">预发布</span>"));
        assert!(html.contains("2025年1月5日"));
        assert!(html.contains("在 GitHub 上查看"));
    }

    #[test]
    fn title_is_escaped() {
        let mut release = test_release("v1.0.0");
        release.name = Some("<img src=x>".to_string());

        let html = render_release_list(&[release], Locale::En);

        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn untitled_when_name_and_tag_empty() {
        let mut release = test_release("");
        release.name = Some(String::new());

        let html = render_release_list(&[release], Locale::En);

        assert!(html.contains("<h3 class=\"release-title\">Untitled release</h3>"));
    }

    #[test]
    fn no_download_links_without_installers() {
        let mut release = test_release("v1.0.0");
        release.assets = vec![test_asset("checksums.txt")];

        let html = render_release_list(&[release], Locale::En);

        assert!(!html.contains("release-download"));
        assert!(html.contains("release-source"));
    }

    #[test]
    fn missing_date_omits_time() {
        let mut release = test_release("v1.0.0");
        release.published_at = None;

        let html = render_release_list(&[release], Locale::En);

        assert!(!html.contains("<time"));
    }

    #[test]
    fn only_latest_stable_is_marked() {
        let releases = vec![test_prerelease("v2.0.0-rc1"), test_release("v1.0.0")];

        let html = render_release_list(&releases, Locale::En);

        assert_eq!(html.matches("release-latest").count(), 1);
        assert!(html.contains("class=\"release release-latest\" id=\"release-v1.0.0\""));
    }

    #[test]
    fn duplicate_tags_mark_only_one_latest() {
        let releases = vec![test_release("v1.0.0"), test_release("v1.0.0")];

        let html = render_release_list(&releases, Locale::En);

        assert_eq!(html.matches("<article").count(), 2);
        assert_eq!(html.matches("release-latest").count(), 1);
        assert!(html.starts_with("<article class=\"release release-latest\""));
    }
}
