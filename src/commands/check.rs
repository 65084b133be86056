use anyhow::Result;
use log::warn;

use crate::{package::PackageManager, release::ReleaseFeed, runtime::Runtime};

use super::Manager;

impl<R: Runtime, P: PackageManager, F: ReleaseFeed> Manager<R, P, F> {
    /// Report whether the instrumentation library can be imported.
    ///
    /// Never fails: presence, absence and a broken interpreter are all
    /// reported on stdout.
    #[tracing::instrument(skip(self))]
    pub async fn check(&self) -> Result<()> {
        let module = self.preset.module();
        match self.packages.probe_version(module).await {
            Ok(Some(version)) => println!("{} is installed: {}", module, version),
            Ok(None) => println!("{} is not installed", module),
            Err(e) => {
                warn!("Probing {} failed: {:#}", module, e);
                println!("Unable to check {}: {:#}", module, e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Preset;
    use super::super::test_support::manager;
    use crate::package::MockPackageManager;
    use crate::release::MockReleaseFeed;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    async fn check_with(result: fn() -> anyhow::Result<Option<String>>) {
        let mut packages = MockPackageManager::new();
        packages
            .expect_probe_version()
            .with(eq("frida"))
            .times(1)
            .returning(move |_| result());

        let m = manager(
            MockRuntime::new(),
            packages,
            MockReleaseFeed::new(),
            Preset::Frida,
        );
        assert!(m.check().await.is_ok());
    }

    #[tokio::test]
    async fn test_check_installed() {
        check_with(|| Ok(Some("16.1.4".into()))).await;
    }

    #[tokio::test]
    async fn test_check_not_installed() {
        check_with(|| Ok(None)).await;
    }

    #[test_log::test(tokio::test)]
    async fn test_check_environment_failure_is_not_fatal() {
        check_with(|| Err(anyhow::anyhow!("python3: not found"))).await;
    }
}
