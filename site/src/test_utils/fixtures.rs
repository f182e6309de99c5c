//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid release that can be customized.

use crate::domain::entities::{Asset, Release};

/// Create a stable release with no assets
pub fn test_release(tag: &str) -> Release {
    Release {
        tag_name: tag.to_string(),
        name: None,
        body: None,
        published_at: Some("2025-01-05T12:00:00Z".to_string()),
        prerelease: false,
        html_url: format!("https://github.com/acme/snapper/releases/tag/{}", tag),
        assets: vec![],
    }
}

/// Create a prerelease with no assets
pub fn test_prerelease(tag: &str) -> Release {
    Release {
        prerelease: true,
        ..test_release(tag)
    }
}

/// Create an asset served from a fixed download host
pub fn test_asset(name: &str) -> Asset {
    Asset {
        name: name.to_string(),
        browser_download_url: format!("https://downloads.test/{}", name),
    }
}

/// A stable release with both installers and some notes
pub fn test_release_with_installers(tag: &str) -> Release {
    Release {
        name: Some(format!("Snapper {}", tag)),
        body: Some("## Highlights\n- Faster capture\n- **New** editor".to_string()),
        assets: vec![
            test_asset(&format!("Snapper-{}.dmg", tag)),
            test_asset(&format!("Snapper-{}-Setup.exe", tag)),
        ],
        ..test_release(tag)
    }
}
