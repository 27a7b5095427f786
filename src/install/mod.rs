use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    download::download_file,
    error::FetchError,
    http::HttpClient,
    release::{DownloadSpec, download_specs},
    runtime::Runtime,
};

pub mod config;
mod listing;

pub use config::{Config, InstallOptions};
pub use listing::{format_listing, format_mode};

/// Fetch every binary for the host platform into the install directory.
#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime>(runtime: R, options: InstallOptions) -> Result<()> {
    let config = Config::new(runtime, options, std::env::consts::OS)?;
    run(config).await
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime>(config: Config<R>) -> Result<()> {
    let specs = download_specs(&config.repo_url, &config.selector, config.platform);
    info!(
        "Installing {} for {} into {:?}",
        config.selector,
        config.platform.target_triple(),
        config.install_dir
    );

    let installer = Installer::new(config.runtime, config.client);
    installer.install_all(&specs, &config.install_dir).await?;
    Ok(())
}

pub struct Installer<R: Runtime> {
    runtime: R,
    http_client: HttpClient,
}

impl<R: Runtime> Installer<R> {
    pub fn new(runtime: R, http_client: HttpClient) -> Self {
        Self {
            runtime,
            http_client,
        }
    }

    /// Install each spec in order, stopping at the first failure.
    #[tracing::instrument(skip(self, specs))]
    pub async fn install_all(&self, specs: &[DownloadSpec], dir: &Path) -> Result<Vec<PathBuf>> {
        let mut installed = Vec::with_capacity(specs.len());
        for spec in specs {
            let path = self
                .install_one(spec, dir)
                .await
                .with_context(|| format!("Failed to install {}", spec.name))?;
            installed.push(path);
        }
        Ok(installed)
    }

    /// Download one binary, make it executable, list it and run `--version`.
    #[tracing::instrument(skip(self))]
    pub async fn install_one(&self, spec: &DownloadSpec, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&spec.name);

        download_file(&self.runtime, &spec.url, &path, &self.http_client).await?;
        self.make_executable(&path)?;

        let metadata = self.runtime.metadata(&path)?;
        println!("{}", format_listing(&metadata, &spec.name));

        self.check_version(&path)?;
        Ok(path)
    }

    /// `chmod +x`: add the execute bit for owner, group and other.
    fn make_executable(&self, path: &Path) -> Result<()> {
        let metadata = self.runtime.metadata(path)?;
        let mode = metadata.mode | 0o111;
        debug!("Setting mode {:o} on {:?}", mode, path);
        self.runtime
            .set_permissions(path, mode)
            .with_context(|| format!("Failed to make {:?} executable", path))
    }

    fn check_version(&self, path: &Path) -> Result<()> {
        let args = ["--version".to_string()];
        let (detail, code) = match self.runtime.run_command(path, &args) {
            Ok(Some(0)) => return Ok(()),
            Ok(Some(code)) => (format!("exited with status {}", code), Some(code)),
            Ok(None) => ("terminated by signal".to_string(), None),
            Err(e) => (format!("{:#}", e), None),
        };

        Err(FetchError::Execution {
            path: path.to_path_buf(),
            detail,
            code,
        }
        .into())
    }
}
