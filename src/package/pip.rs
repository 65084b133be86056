//! `pip` driven through a Python interpreter (`python -m pip ...`).

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, trace};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tokio::process::Command;

use crate::error::FvmError;

use super::PackageManager;

/// Interpreter used when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";

/// Exit code of [`PROBE_SCRIPT`] when the module cannot be imported.
const PROBE_MISSING_EXIT: i32 = 3;

const PROBE_SCRIPT: &str = "\
import importlib, sys
try:
    module = importlib.import_module(sys.argv[1])
except ImportError:
    sys.exit(3)
print(getattr(module, '__version__', 'unknown'))
";

#[derive(Debug, Clone)]
pub struct Pip {
    python: PathBuf,
}

impl Pip {
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    fn build_command(&self, args: &[&str]) -> Command {
        debug!(
            "Building command: {} {}",
            self.python.display(),
            args.join(" ")
        );
        let mut cmd = Command::new(&self.python);
        cmd.args(args);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.python.display(), args.join(" "))
    }

    fn failure(&self, args: &[&str], status: ExitStatus, stderr: &str) -> FvmError {
        let stderr = stderr.trim();
        FvmError::CommandFailed {
            command: self.describe(args),
            status: if stderr.is_empty() {
                status.to_string()
            } else {
                format!("{}: {}", status, stderr)
            },
        }
    }

    /// Run with captured output, returning stdout on success.
    async fn capture(&self, args: &[&str]) -> Result<String> {
        info!("Executing: {}", self.describe(args));

        let output = self
            .build_command(args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.python.display()))?;

        debug!("exit status: {:?}", output.status);
        trace!("stdout: {}", String::from_utf8_lossy(&output.stdout));

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(self.failure(args, output.status, &stderr).into())
        }
    }
}

impl Default for Pip {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

#[async_trait]
impl PackageManager for Pip {
    async fn available_versions(&self, package: &str) -> Result<String> {
        self.capture(&["-m", "pip", "index", "versions", package])
            .await
    }

    async fn install(&self, package: &str, version: &str) -> Result<()> {
        let spec = format!("{}=={}", package, version);
        let args = ["-m", "pip", "install", spec.as_str()];
        info!("Executing: {}", self.describe(&args));

        // pip's own progress goes straight to the terminal
        let status = self
            .build_command(&args)
            .status()
            .await
            .with_context(|| format!("Failed to run {}", self.python.display()))?;

        if status.success() {
            Ok(())
        } else {
            Err(self.failure(&args, status, "").into())
        }
    }

    async fn list_installed(&self) -> Result<String> {
        self.capture(&["-m", "pip", "list", "--format=freeze"]).await
    }

    async fn probe_version(&self, module: &str) -> Result<Option<String>> {
        let args = ["-c", PROBE_SCRIPT, module];
        let output = self
            .build_command(&args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.python.display()))?;

        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            return Ok(Some(version));
        }

        if output.status.code() == Some(PROBE_MISSING_EXIT) {
            debug!("Module {} is not importable", module);
            return Ok(None);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(self
            .failure(&["-c", "<probe>", module], output.status, &stderr)
            .into())
    }
}
