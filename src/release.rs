//! Artifact naming and download URL selection.

use std::fmt;

use crate::platform::Platform;

/// Upstream repository hosting the release artifacts and the master-bin branch.
pub const DEFAULT_REPO_URL: &str = "https://github.com/solana-labs/stake-o-matic";

/// Binaries fetched on every run, in order.
pub const BINARIES: [&str; 2] = ["solana-stake-o-matic", "registry-cli"];

/// Which build to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// Latest unreleased build published on the `master-bin` branch
    Master,
    /// A published release tag
    Tag(String),
    /// Whatever GitHub currently marks as the latest release
    Latest,
}

impl VersionSelector {
    /// Pick the selector for an optional version argument.
    ///
    /// An explicit `master` always wins; an empty or missing argument falls
    /// back to `Master` when `prefer_master` is set and `Latest` otherwise.
    pub fn resolve(version: Option<&str>, prefer_master: bool) -> Self {
        match version.map(str::trim).filter(|v| !v.is_empty()) {
            Some("master") => VersionSelector::Master,
            Some(tag) => VersionSelector::Tag(tag.to_string()),
            None if prefer_master => VersionSelector::Master,
            None => VersionSelector::Latest,
        }
    }

    /// Download URL of `binary` built for `target_triple`.
    pub fn url_for(&self, repo_url: &str, binary: &str, target_triple: &str) -> String {
        let repo_url = repo_url.trim_end_matches('/');
        let artifact = format!("{}-{}", binary, target_triple);
        match self {
            VersionSelector::Master => format!("{}/raw/master-bin/{}", repo_url, artifact),
            VersionSelector::Tag(tag) => {
                format!("{}/releases/download/{}/{}", repo_url, tag, artifact)
            }
            VersionSelector::Latest => {
                format!("{}/releases/latest/download/{}", repo_url, artifact)
            }
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Master => write!(f, "master"),
            VersionSelector::Tag(tag) => write!(f, "{}", tag),
            VersionSelector::Latest => write!(f, "latest release"),
        }
    }
}

/// A binary name paired with the URL it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSpec {
    pub name: String,
    pub url: String,
}

impl DownloadSpec {
    pub fn new(
        repo_url: &str,
        selector: &VersionSelector,
        binary: &str,
        platform: Platform,
    ) -> Self {
        Self {
            name: binary.to_string(),
            url: selector.url_for(repo_url, binary, platform.target_triple()),
        }
    }
}

/// Download specs for every entry of [`BINARIES`], preserving order.
pub fn download_specs(
    repo_url: &str,
    selector: &VersionSelector,
    platform: Platform,
) -> Vec<DownloadSpec> {
    BINARIES
        .iter()
        .map(|binary| DownloadSpec::new(repo_url, selector, binary, platform))
        .collect()
}
