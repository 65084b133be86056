//! The five version-manager operations.
//!
//! Each operation runs to completion sequentially. Listing and checking
//! report failures and return `Ok`; installing and switching return the
//! error so the process exits non-zero.

use anyhow::Result;
use log::debug;

use crate::{
    asset::MatchPolicy, http::HttpClient, package::PackageManager, release::ReleaseFeed,
    runtime::Runtime,
};

mod check;
pub mod config;
mod install;
mod list;
pub mod preset;

pub use config::Config;
pub use preset::{Preset, artifact_file_name};

/// Operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Check,
    /// Install a pinned version, or list available versions when `None`
    Install(Option<String>),
    Use(String),
    List,
}

pub struct Manager<R: Runtime, P: PackageManager, F: ReleaseFeed> {
    runtime: R,
    packages: P,
    feed: F,
    http_client: HttpClient,
    preset: Preset,
    policy: Box<dyn MatchPolicy>,
}

impl<R: Runtime, P: PackageManager, F: ReleaseFeed> Manager<R, P, F> {
    pub fn new(config: Config<R, P, F>) -> Self {
        Self {
            policy: config.preset.match_policy(),
            runtime: config.runtime,
            packages: config.packages,
            feed: config.feed,
            http_client: config.http_client,
            preset: config.preset,
        }
    }

    /// Replace the preset's asset match policy.
    pub fn with_policy(mut self, policy: Box<dyn MatchPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(&self, action: &Action) -> Result<()> {
        debug!("Running {:?} with preset {}", action, self.preset);
        match action {
            Action::Check => self.check().await,
            Action::Install(version) => self.install(version.as_deref()).await,
            Action::Use(version) => self.use_version(version).await,
            Action::List => self.list_installed().await,
        }
    }
}
