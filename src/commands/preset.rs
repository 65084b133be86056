//! Named bundles of package name, probe module and asset match policy.

use std::fmt;

use clap::ValueEnum;

use crate::asset::{FirstAsset, KeywordMatch, MatchPolicy};

/// File name prefix of the downloaded server binary.
pub const ARTIFACT_PREFIX: &str = "fridaserver";

/// File name the server binary for `version` is saved under.
pub fn artifact_file_name(version: &str) -> String {
    format!("{}-{}.xz", ARTIFACT_PREFIX, version)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Preset {
    /// Pin the `frida` package; download the first asset of the release
    #[default]
    Frida,
    /// Pin the `frida-tools` package; download the Android arm64 frida-server
    FridaTools,
}

impl Preset {
    /// Package pinned through the package manager.
    pub fn package(&self) -> &'static str {
        match self {
            Preset::Frida => "frida",
            Preset::FridaTools => "frida-tools",
        }
    }

    /// Module imported to check whether the library is available.
    pub fn module(&self) -> &'static str {
        "frida"
    }

    pub fn match_policy(&self) -> Box<dyn MatchPolicy> {
        match self {
            Preset::Frida => Box::new(FirstAsset),
            Preset::FridaTools => Box::new(KeywordMatch::android_arm64_server()),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Frida => write!(f, "frida"),
            Preset::FridaTools => write!(f, "frida-tools"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::ReleaseAsset;

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(artifact_file_name("16.1.4"), "fridaserver-16.1.4.xz");
        assert_eq!(artifact_file_name("v1.2.3"), "fridaserver-v1.2.3.xz");
    }

    #[test]
    fn test_preset_packages() {
        assert_eq!(Preset::default(), Preset::Frida);
        assert_eq!(Preset::Frida.package(), "frida");
        assert_eq!(Preset::FridaTools.package(), "frida-tools");
        assert_eq!(Preset::FridaTools.module(), "frida");
    }

    #[test]
    fn test_preset_value_names() {
        assert_eq!(Preset::from_str("frida", false).unwrap(), Preset::Frida);
        assert_eq!(
            Preset::from_str("frida-tools", false).unwrap(),
            Preset::FridaTools
        );
        assert!(Preset::from_str("FRIDA", false).is_err());
        assert_eq!(Preset::FridaTools.to_string(), "frida-tools");
    }

    #[test]
    fn test_preset_policies_differ() {
        let assets = vec![
            ReleaseAsset {
                name: "frida-clang-linux.tar.xz".into(),
                download_url: "https://example.com/1".into(),
            },
            ReleaseAsset {
                name: "frida-server-16.1.4-android-arm64.xz".into(),
                download_url: "https://example.com/2".into(),
            },
        ];

        let first = Preset::Frida.match_policy();
        assert_eq!(first.pick(&assets).unwrap().download_url, "https://example.com/1");

        let scoped = Preset::FridaTools.match_policy();
        assert_eq!(scoped.pick(&assets).unwrap().download_url, "https://example.com/2");
    }
}
