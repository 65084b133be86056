//! Runtime abstraction for system operations.
//!
//! The operations touch the process environment and the working directory
//! only through this trait, so tests can substitute a mock.
//!
//! - `env` - Environment variables and working directory
//! - `fs` - File creation for downloaded artifacts

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    /// Create (or truncate) a file for writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }
}
