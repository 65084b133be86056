//! Fatal error kinds surfaced to the user.

use std::fmt;

/// Errors that terminate an `fvm` invocation.
#[derive(Debug)]
pub enum FvmError {
    /// A package-manager subprocess exited unsuccessfully
    CommandFailed { command: String, status: String },
    /// No release in the feed carries the requested tag
    ReleaseNotFound(String),
    /// The release exists but the match policy accepted none of its assets
    NoMatchingAsset { version: String, policy: String },
    /// HTTP request rejected by the server
    Http(String),
}

impl fmt::Display for FvmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FvmError::CommandFailed { command, status } => {
                write!(f, "`{}` failed ({})", command, status)
            }
            FvmError::ReleaseNotFound(version) => {
                write!(f, "No release tagged '{}' found in the release feed", version)
            }
            FvmError::NoMatchingAsset { version, policy } => {
                write!(
                    f,
                    "No matching asset for required platform in release '{}' (policy: {})",
                    version, policy
                )
            }
            FvmError::Http(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for FvmError {}
