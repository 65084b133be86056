use anyhow::Result;
use log::{debug, warn};

use crate::{
    package::{PackageManager, parse_installed},
    release::ReleaseFeed,
    runtime::Runtime,
};

use super::Manager;

impl<R: Runtime, P: PackageManager, F: ReleaseFeed> Manager<R, P, F> {
    /// Print the package manager's version index for the tracked package.
    #[tracing::instrument(skip(self))]
    pub async fn list_available(&self) -> Result<()> {
        let package = self.preset.package();
        match self.packages.available_versions(package).await {
            Ok(output) => {
                println!("Available {} versions:", package);
                println!("{}", output.trim_end());
            }
            Err(e) => {
                warn!("Version index query failed: {:#}", e);
                println!("Failed to get {} versions: {:#}", package, e);
            }
        }
        Ok(())
    }

    /// Versions of the tracked package the manager reports as installed,
    /// in the manager's order.
    pub async fn installed_versions(&self) -> Result<Vec<String>> {
        let listing = self.packages.list_installed().await?;
        let versions = parse_installed(&listing, self.preset.package());
        debug!("Found {} installed version(s)", versions.len());
        Ok(versions)
    }

    /// Print installed versions of the tracked package, one per line.
    #[tracing::instrument(skip(self))]
    pub async fn list_installed(&self) -> Result<()> {
        let package = self.preset.package();
        match self.installed_versions().await {
            Ok(versions) if versions.is_empty() => {
                println!("No {} versions installed.", package);
            }
            Ok(versions) => {
                println!("Installed {} versions:", package);
                for version in versions {
                    println!("{}", version);
                }
            }
            Err(e) => {
                warn!("Installed listing failed: {:#}", e);
                println!("Failed to get installed versions: {:#}", e);
            }
        }
        Ok(())
    }
}
