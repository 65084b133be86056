//! Release feed abstraction.
//!
//! A release feed enumerates tagged releases and their downloadable assets.

mod github;

use anyhow::Result;
use async_trait::async_trait;

pub use github::{DEFAULT_API_URL, GitHubFeed, RELEASES_REPO};

/// A downloadable asset from a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
}

/// A release from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "16.1.4")
    pub tag: String,
    /// Downloadable assets, in feed order
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Find the release whose tag is exactly `tag`.
    ///
    /// Comparison is plain string equality: "1.2.3" and "v1.2.3" are
    /// different tags.
    pub fn find<'a>(releases: &'a [Release], tag: &str) -> Option<&'a Release> {
        releases.iter().find(|r| r.tag == tag)
    }
}

/// Source of release information.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// The endpoint releases are read from.
    fn url(&self) -> String;

    /// Fetch the release list. Only the first response page is consulted.
    async fn get_releases(&self) -> Result<Vec<Release>>;
}
