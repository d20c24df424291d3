//! Engine error type

use thiserror::Error;

/// Errors raised by the download-and-deliver operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The storage provider finished without producing a usable artifact path.
    #[error("Unable to download {url}")]
    Acquisition { url: String },

    /// The server answered with a non-success status line.
    #[error("Download failed: {status} - {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Transport-level failure from the HTTP client.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage I/O failure.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The share presenter rejected the request.
    #[error("Share failed: {0}")]
    Share(String),

    /// The external opener could not hand the file off.
    #[error("Open failed: {0}")]
    Open(String),
}
