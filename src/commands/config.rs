use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    http::HttpClient,
    package::{DEFAULT_PYTHON, PackageManager, Pip},
    release::{DEFAULT_API_URL, GitHubFeed, ReleaseFeed},
    runtime::Runtime,
};

use super::preset::Preset;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Config<R: Runtime, P: PackageManager, F: ReleaseFeed> {
    pub runtime: R,
    pub packages: P,
    pub feed: F,
    pub http_client: HttpClient,
    pub preset: Preset,
}

impl<R: Runtime> Config<R, Pip, GitHubFeed> {
    pub fn new(
        runtime: R,
        python: Option<PathBuf>,
        api_url: Option<String>,
        preset: Preset,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let client = Client::builder()
            .user_agent("fvm-cli")
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let http_client = HttpClient::new(client);
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let feed = GitHubFeed::new(http_client.clone(), &api_url);
        let packages = Pip::new(python.unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON)));

        debug!(
            "Config: python={}, feed={}, preset={}",
            packages.python().display(),
            feed.url(),
            preset
        );

        Ok(Self {
            runtime,
            packages,
            feed,
            http_client,
            preset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockito::{Matcher, Server};

    fn runtime_with_token(token: Option<&str>) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        let token = token.map(|t| t.to_string());
        runtime
            .expect_env_var()
            .with(mockall::predicate::eq("GITHUB_TOKEN"))
            .returning(move |_| token.clone().ok_or(std::env::VarError::NotPresent));
        runtime
    }

    /// Helper function to verify Authorization header behavior
    /// - `token`: Some(token) to test with GITHUB_TOKEN set, None to test without
    async fn verify_authorization_header(token: Option<&str>) {
        let runtime = runtime_with_token(token);

        let mut server = Server::new_async().await;

        let expected_header = match token {
            Some(t) => Matcher::Exact(format!("Bearer {}", t)),
            None => Matcher::Missing,
        };

        let mock = server
            .mock("GET", "/")
            .match_header("Authorization", expected_header)
            .match_header("User-Agent", "fvm-cli")
            .create_async()
            .await;

        let config = Config::new(runtime, None, None, Preset::Frida).unwrap();
        let _ = config.http_client.inner().get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_config_new_with_github_token() {
        verify_authorization_header(Some("test_token")).await;
    }

    #[tokio::test]
    async fn test_config_new_without_github_token() {
        verify_authorization_header(None).await;
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(runtime_with_token(None), None, None, Preset::Frida).unwrap();
        assert_eq!(config.packages.python(), std::path::Path::new(DEFAULT_PYTHON));
        assert_eq!(
            config.feed.url(),
            "https://api.github.com/repos/frida/frida/releases"
        );
        assert_eq!(config.preset, Preset::Frida);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new(
            runtime_with_token(None),
            Some(PathBuf::from("/opt/py/bin/python")),
            Some("http://localhost:8080".into()),
            Preset::FridaTools,
        )
        .unwrap();
        assert_eq!(
            config.packages.python(),
            std::path::Path::new("/opt/py/bin/python")
        );
        assert_eq!(
            config.feed.url(),
            "http://localhost:8080/repos/frida/frida/releases"
        );
        assert_eq!(config.preset, Preset::FridaTools);
    }
}
