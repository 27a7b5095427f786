use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::path::PathBuf;

use crate::{
    http::{HttpClient, USER_AGENT},
    platform::Platform,
    release::{DEFAULT_REPO_URL, VersionSelector},
    runtime::Runtime,
};

/// Options collected from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Release tag, `master`, or nothing for the default build
    pub version: Option<String>,
    /// Use the master build when no version is given
    pub prefer_master: bool,
    /// Repository base URL; the upstream GitHub repository when unset
    pub repo_url: Option<String>,
    /// Target directory; the current directory when unset
    pub install_dir: Option<PathBuf>,
}

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub client: HttpClient,
    pub platform: Platform,
    pub selector: VersionSelector,
    pub repo_url: String,
    pub install_dir: PathBuf,
}

impl<R: Runtime> Config<R> {
    /// Resolve everything a run needs. The platform is checked first so an
    /// unsupported host fails before anything else is touched.
    pub fn new(runtime: R, options: InstallOptions, os_name: &str) -> Result<Self> {
        let platform = Platform::from_os_name(os_name)?;
        let selector =
            VersionSelector::resolve(options.version.as_deref(), options.prefer_master);
        let repo_url = options
            .repo_url
            .unwrap_or_else(|| DEFAULT_REPO_URL.to_string());
        // An empty directory would leave the binary path without a
        // separator, and spawning it would then search PATH.
        let install_dir = match options.install_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => runtime.current_dir()?,
        };
        let client = build_client(&runtime)?;

        debug!(
            "Resolved {} ({}), {} from {} into {:?}",
            platform,
            platform.target_triple(),
            selector,
            repo_url,
            install_dir
        );

        Ok(Self {
            runtime,
            client,
            platform,
            selector,
            repo_url,
            install_dir,
        })
    }
}

fn build_client<R: Runtime>(runtime: &R) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
        let token = token.trim();
        if !token.is_empty() {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}
