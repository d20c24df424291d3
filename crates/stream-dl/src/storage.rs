//! Scoped-directory storage provider
//!
//! Files are addressed by a (directory-class, relative-path) pair and
//! resolved to absolute paths under the roots the provider was built with.
//! Streamed downloads write bytes straight from the network to disk, so
//! large files never pass through the caller's memory.

use async_trait::async_trait;
use futures_util::StreamExt;
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::error::FetchError;
use crate::progress::{ProgressSender, ProgressStatus};

/// Write buffer size for streamed downloads (2 MB) - reduces I/O operations
const WRITE_BUFFER_SIZE: usize = 2 * 1024 * 1024;

/// Directory class a relative path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directory {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "temp")]
    Temp,
}

/// Parameters for a directory-to-file streamed download.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub directory: Directory,
    pub path: String,
    /// Report progress while the transfer runs.
    pub progress: bool,
}

/// Scoped file storage with a direct URL-to-file download path.
///
/// `download_file` resolves to `Ok(None)` when no artifact was produced;
/// callers decide what an absent path means for them.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Stream the URL content into `(directory, path)` and return the
    /// absolute path of the artifact, or `None` when none was produced.
    async fn download_file(&self, request: DownloadRequest)
        -> Result<Option<PathBuf>, FetchError>;

    /// Write raw bytes verbatim to `(directory, path)` and return the
    /// absolute path. The payload is never routed through a text encoding.
    async fn write_file(
        &self,
        directory: Directory,
        path: &str,
        data: &[u8],
    ) -> Result<PathBuf, FetchError>;
}

/// Disk-backed storage provider rooted at per-class directories.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    cache_dir: PathBuf,
    data_dir: PathBuf,
    temp_dir: PathBuf,
    client: Client,
    progress: Option<ProgressSender>,
}

impl LocalStorage {
    pub fn new(cache_dir: PathBuf, data_dir: PathBuf, temp_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            data_dir,
            temp_dir,
            client: Client::new(),
            progress: None,
        }
    }

    /// Install the progress subscription. Expected to happen once, before
    /// any download starts.
    pub fn with_progress(mut self, sender: ProgressSender) -> Self {
        self.progress = Some(sender);
        self
    }

    fn root(&self, directory: Directory) -> &Path {
        match directory {
            Directory::Cache => &self.cache_dir,
            Directory::Data => &self.data_dir,
            Directory::Temp => &self.temp_dir,
        }
    }

    async fn resolve(&self, directory: Directory, path: &str) -> Result<PathBuf, FetchError> {
        let destination = self.root(directory).join(path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(destination)
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn download_file(
        &self,
        request: DownloadRequest,
    ) -> Result<Option<PathBuf>, FetchError> {
        let destination = self.resolve(request.directory, &request.path).await?;

        let response = self.client.get(&request.url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url: request.url.clone(),
            });
        }

        let content_length = response.content_length().unwrap_or(0);
        let mut file = File::create(&destination).await?;
        let mut stream = response.bytes_stream();

        // Buffer writes to cut down on I/O syscalls for large transfers
        let mut write_buffer = Vec::with_capacity(WRITE_BUFFER_SIZE);
        let mut transferred: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            write_buffer.extend_from_slice(&chunk);
            transferred += chunk.len() as u64;

            if write_buffer.len() >= WRITE_BUFFER_SIZE {
                file.write_all(&write_buffer).await?;
                write_buffer.clear();
            }

            if request.progress {
                if let Some(sender) = &self.progress {
                    sender.publish(ProgressStatus {
                        url: request.url.clone(),
                        bytes: transferred,
                        content_length,
                    });
                }
            }
        }

        if !write_buffer.is_empty() {
            file.write_all(&write_buffer).await?;
        }
        file.flush().await?;

        info!(
            "downloaded {} ({} bytes) to {}",
            request.url,
            transferred,
            destination.display()
        );

        Ok(Some(destination))
    }

    async fn write_file(
        &self,
        directory: Directory,
        path: &str,
        data: &[u8],
    ) -> Result<PathBuf, FetchError> {
        let destination = self.resolve(directory, path).await?;
        fs::write(&destination, data).await?;
        Ok(destination)
    }
}
