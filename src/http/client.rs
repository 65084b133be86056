//! HTTP client wrapper for JSON fetches and streamed downloads.
//!
//! Requests are attempted exactly once; failures are returned to the caller.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Write;
use std::time::Duration;

use super::status::check_status;

/// Thin wrapper over a reqwest [`Client`].
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.context("Failed to send request")?;
        let response = response.error_for_status().map_err(check_status)?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }

    /// Streams `url` into the writer returned by `create_writer`.
    ///
    /// The writer is only created once the server answered with a success
    /// status. `on_chunk` is called with the size of every chunk written.
    /// Returns the number of bytes written.
    #[tracing::instrument(skip(self, create_writer, on_chunk))]
    pub async fn download_file<W, F, P>(
        &self,
        url: &str,
        create_writer: F,
        mut on_chunk: P,
    ) -> Result<u64>
    where
        W: Write,
        F: FnOnce() -> Result<W>,
        P: FnMut(usize),
    {
        debug!("Downloading file from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to start download request")?;

        let mut response = response.error_for_status().map_err(check_status)?;

        let mut writer = create_writer()?;
        let mut downloaded_bytes: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .context("Failed to read chunk from download stream")?
        {
            writer
                .write_all(&chunk)
                .context("Failed to write chunk to file")?;
            downloaded_bytes += chunk.len() as u64;
            on_chunk(chunk.len());
        }

        writer.flush().context("Failed to flush downloaded file")?;

        debug!(
            "Downloaded {:.2} MB",
            downloaded_bytes as f64 / (1024.0 * 1024.0)
        );

        Ok(downloaded_bytes)
    }
}
