//! Download-button populator
//!
//! Picks the latest release and resolves what each platform's download
//! button should show.

use serde::Serialize;

use crate::domain::entities::{Platform, Release};

/// State of one platform's download button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ButtonState {
    /// Button visible, pointing at the installer
    Available { href: String, version: String },
    /// The feed is empty: button hidden, fallback shows the "no release" message
    NoRelease,
    /// The latest release has no installer for this platform: default fallback
    Unavailable,
}

/// Button states for every platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadButtons {
    /// Tag of the release the buttons were resolved from
    pub release: Option<String>,
    pub macos: ButtonState,
    pub windows: ButtonState,
}

impl DownloadButtons {
    pub fn get(&self, platform: Platform) -> &ButtonState {
        match platform {
            Platform::MacOs => &self.macos,
            Platform::Windows => &self.windows,
        }
    }
}

/// The first stable release, or the first release when every entry is a prerelease
pub fn select_latest(releases: &[Release]) -> Option<&Release> {
    releases
        .iter()
        .find(|r| !r.prerelease)
        .or_else(|| releases.first())
}

pub fn populate_downloads(releases: &[Release]) -> DownloadButtons {
    let Some(latest) = select_latest(releases) else {
        return DownloadButtons {
            release: None,
            macos: ButtonState::NoRelease,
            windows: ButtonState::NoRelease,
        };
    };

    let resolve = |platform: Platform| match latest.asset_for(platform) {
        Some(asset) => ButtonState::Available {
            href: asset.browser_download_url.clone(),
            version: latest.tag_name.clone(),
        },
        None => ButtonState::Unavailable,
    };

    DownloadButtons {
        release: Some(latest.tag_name.clone()),
        macos: resolve(Platform::MacOs),
        windows: resolve(Platform::Windows),
    }
}
