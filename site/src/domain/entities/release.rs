//! Release domain entity
//!
//! A tagged, published version of the desktop application, as returned by the
//! releases-list endpoint. Only the fields the site renders are decoded.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// A published release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes in the Markdown subset understood by `render::markdown`
    #[serde(default)]
    pub body: Option<String>,
    /// Raw timestamp string; `null` for drafts
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    pub html_url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub assets: Vec<Asset>,
}

impl Release {
    /// Release name, falling back to the tag name. Empty strings count as absent.
    pub fn title(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| Some(self.tag_name.as_str()).filter(|t| !t.is_empty()))
    }

    /// First asset that installs on `platform`
    pub fn asset_for(&self, platform: Platform) -> Option<&Asset> {
        self.assets.iter().find(|a| platform.matches(&a.name))
    }
}

/// Desktop platforms with a download button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::MacOs, Platform::Windows];

    /// Whether an asset file name is an installer for this platform
    pub fn matches(self, asset_name: &str) -> bool {
        match self {
            Platform::MacOs => asset_name.ends_with(".dmg"),
            Platform::Windows => {
                asset_name.ends_with(".exe") || asset_name.contains("Setup.exe")
            }
        }
    }

    /// Suffix used in element IDs (`download-macos`, `no-release-windows`)
    pub fn slug(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
        }
    }
}
