//! Asset selection.
//!
//! A [`MatchPolicy`] picks exactly one asset out of a release.

mod picker;

pub use picker::{FirstAsset, KeywordMatch, MatchPolicy, SERVER_ANDROID_ARM64};
