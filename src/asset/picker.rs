use std::fmt;

use crate::release::ReleaseAsset;

/// Keywords identifying the Android arm64 server binary.
pub const SERVER_ANDROID_ARM64: [&str; 3] = ["frida-server", "android", "arm64"];

/// Trait for selecting an asset from a list of available assets
pub trait MatchPolicy: Send + Sync + fmt::Display {
    /// Pick the asset to download from the given list
    ///
    /// Returns `None` if no asset qualifies
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Takes the first asset in feed order, whatever platform it targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAsset;

impl MatchPolicy for FirstAsset {
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        assets.first()
    }
}

impl fmt::Display for FirstAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "first asset")
    }
}

/// Takes the first asset whose name contains every keyword
/// (case-insensitive).
#[derive(Debug, Clone)]
pub struct KeywordMatch {
    keywords: Vec<String>,
}

impl KeywordMatch {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Matches `frida-server` builds for Android on arm64.
    pub fn android_arm64_server() -> Self {
        Self::new(SERVER_ANDROID_ARM64)
    }

    fn matches(&self, name: &str) -> bool {
        let name_lower = name.to_lowercase();
        self.keywords.iter().all(|k| name_lower.contains(k.as_str()))
    }
}

impl MatchPolicy for KeywordMatch {
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        assets.iter().find(|a| self.matches(&a.name))
    }
}

impl fmt::Display for KeywordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name contains {}", self.keywords.join(" + "))
    }
}
