//! Package manager abstraction.
//!
//! The client library is installed, pinned and listed through an external
//! package manager. [`Pip`] drives `pip` through a Python interpreter.

mod pip;

use anyhow::Result;
use async_trait::async_trait;

pub use pip::{DEFAULT_PYTHON, Pip};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Raw output of the manager's version-index query for `package`.
    async fn available_versions(&self, package: &str) -> Result<String>;

    /// Install exactly `package==version`.
    async fn install(&self, package: &str, version: &str) -> Result<()>;

    /// Raw `name==version` listing of installed packages.
    async fn list_installed(&self) -> Result<String>;

    /// Version of the importable `module`, or `None` when it cannot be
    /// imported.
    async fn probe_version(&self, module: &str) -> Result<Option<String>>;
}

/// Extract the versions of `package` from a `name==version` listing.
///
/// Order is preserved and duplicates are kept.
pub fn parse_installed(listing: &str, package: &str) -> Vec<String> {
    let prefix = format!("{}==", package);
    listing
        .lines()
        .filter_map(|line| line.trim_end().strip_prefix(prefix.as_str()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_installed_exact_package() {
        let listing = "frida==16.1.4\nfrida-tools==12.3.0\nrequests==2.31.0\n";
        assert_eq!(parse_installed(listing, "frida"), vec!["16.1.4"]);
        assert_eq!(parse_installed(listing, "frida-tools"), vec!["12.3.0"]);
    }

    #[test]
    fn test_parse_installed_keeps_order_and_duplicates() {
        let listing = "frida==16.1.4\nsix==1.16.0\nfrida==15.2.2\nfrida==16.1.4\n";
        assert_eq!(
            parse_installed(listing, "frida"),
            vec!["16.1.4", "15.2.2", "16.1.4"]
        );
    }

    #[test]
    fn test_parse_installed_none() {
        assert!(parse_installed("requests==2.31.0\n", "frida").is_empty());
        assert!(parse_installed("", "frida").is_empty());
    }

    #[test]
    fn test_parse_installed_crlf() {
        let listing = "frida==16.1.4\r\nsix==1.16.0\r\n";
        assert_eq!(parse_installed(listing, "frida"), vec!["16.1.4"]);
    }
}
