//! GitHub releases feed.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use crate::http::HttpClient;

use super::{Release, ReleaseAsset, ReleaseFeed};

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository whose releases carry the server binaries.
pub const RELEASES_REPO: &str = "frida/frida";

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub browser_download_url: String,
    }
}

/// Reads releases of [`RELEASES_REPO`] from the GitHub REST API.
pub struct GitHubFeed {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubFeed {
    pub fn new(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ReleaseFeed for GitHubFeed {
    fn url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_url, RELEASES_REPO)
    }

    async fn get_releases(&self) -> Result<Vec<Release>> {
        let url = self.url();
        debug!("Fetching releases from {}...", url);

        let releases: Vec<api::Release> = self
            .http_client
            .get_json(&url, Some(FETCH_TIMEOUT))
            .await?;

        debug!("Fetched {} release(s)", releases.len());
        Ok(releases.into_iter().map(Release::from).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            assets: r.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
        }
    }
}
