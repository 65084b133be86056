use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::{
    error::FvmError,
    package::PackageManager,
    release::{Release, ReleaseFeed},
    runtime::Runtime,
};

use super::{Manager, artifact_file_name};

impl<R: Runtime, P: PackageManager, F: ReleaseFeed> Manager<R, P, F> {
    /// Pin `version` and download the matching server binary.
    ///
    /// Without a version this only lists what the package index offers.
    #[tracing::instrument(skip(self))]
    pub async fn install(&self, version: Option<&str>) -> Result<()> {
        let Some(version) = version else {
            return self.list_available().await;
        };

        let package = self.preset.package();
        println!("Installing {} {}", package, version);
        self.packages
            .install(package, version)
            .await
            .with_context(|| format!("Failed to install {}=={}", package, version))?;
        println!("{} {} installed successfully", package, version);

        self.download_server(version).await?;
        Ok(())
    }

    /// Re-pin the installed package to `version`.
    ///
    /// The server binary is not touched.
    #[tracing::instrument(skip(self))]
    pub async fn use_version(&self, version: &str) -> Result<()> {
        let package = self.preset.package();
        println!("Switching {} to {}", package, version);
        self.packages
            .install(package, version)
            .await
            .with_context(|| format!("Failed to switch {} to {}", package, version))?;
        println!("Switched to {} {}", package, version);
        println!(
            "frida-server is managed separately; run `fvm --install {}` to download it",
            version
        );
        Ok(())
    }

    /// Fetch the release tagged `version` and save its selected asset as
    /// `fridaserver-<version>.xz` in the working directory.
    ///
    /// An existing file is overwritten. A failed transfer leaves whatever was
    /// written on disk. One `.` is printed per chunk received from the
    /// network, so the number of markers depends on how the body arrives.
    #[tracing::instrument(skip(self))]
    pub async fn download_server(&self, version: &str) -> Result<PathBuf> {
        println!("Downloading fridaserver {}...", version);

        let releases = self
            .feed
            .get_releases()
            .await
            .with_context(|| format!("Failed to get release information from {}", self.feed.url()))?;

        let release = Release::find(&releases, version)
            .ok_or_else(|| FvmError::ReleaseNotFound(version.to_string()))?;

        let asset = self
            .policy
            .pick(&release.assets)
            .ok_or_else(|| FvmError::NoMatchingAsset {
                version: version.to_string(),
                policy: self.policy.to_string(),
            })?;
        info!("Selected asset {} ({})", asset.name, asset.download_url);

        let target = self.runtime.current_dir()?.join(artifact_file_name(version));
        let runtime = &self.runtime;
        let bytes = self
            .http_client
            .download_file(
                &asset.download_url,
                || runtime.create_file(&target),
                |_| {
                    print!(".");
                    let _ = std::io::stdout().flush();
                },
            )
            .await
            .with_context(|| format!("Failed to download {}", asset.name))?;

        println!();
        println!(
            "fridaserver {} downloaded to {} ({} bytes)",
            version,
            target.display(),
            bytes
        );
        Ok(target)
    }
}
