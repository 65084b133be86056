//! File system operations.

use anyhow::{Context, Result};
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn create_file_impl(
        &self,
        path: &Path,
    ) -> Result<Box<dyn std::io::Write + Send>> {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create file at {:?}", path))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_create_file_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artifact.xz");
        std::fs::write(&path, b"old content that is longer").unwrap();

        let runtime = RealRuntime;
        {
            let mut writer = runtime.create_file(&path).unwrap();
            writer.write_all(b"new").unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_create_file_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("artifact.xz");

        let runtime = RealRuntime;
        assert!(runtime.create_file(&path).is_err());
    }
}
