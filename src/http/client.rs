//! HTTP client for artifact downloads.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::io::Write;

use crate::error::FetchError;

pub const USER_AGENT: &str = "som-fetch";

/// HTTP client used for artifact downloads.
///
/// Redirects are followed (reqwest's default policy), which GitHub relies
/// on for both `releases/download` and `releases/latest/download`.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Downloads a URL, streaming the body into the writer returned by
    /// `create_writer`.
    ///
    /// The writer is only created once the response status is known to be
    /// successful, so a failed transfer never truncates an existing file.
    /// Transport failures and non-2xx statuses are reported as
    /// [`FetchError::Transfer`].
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(&self, url: &str, create_writer: F) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transfer(url, e))?;

        if response.url().as_str() != url {
            debug!("Redirected to {}", response.url());
        }

        let mut response = response
            .error_for_status()
            .map_err(|e| FetchError::transfer(url, e))?;

        let mut writer = create_writer()?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::transfer(url, e))?
        {
            writer
                .write_all(&chunk)
                .context("Failed to write chunk to file")?;
            downloaded_bytes += chunk.len() as u64;
        }
        writer.flush().context("Failed to flush downloaded file")?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
