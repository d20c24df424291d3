//! PDF event types and payloads

use serde::Serialize;

/// Progress event payload for streamed downloads
#[derive(Debug, Clone, Serialize)]
pub struct DownloadProgress {
    pub fraction: f64,
    pub bytes: u64,
    pub content_length: u64,
}

/// Status change event payload
#[derive(Debug, Clone, Serialize)]
pub struct DownloadStatusChanged {
    pub status: String,
    pub error: Option<String>,
}

/// Share request payload handed to the webview
#[derive(Debug, Clone, Serialize)]
pub struct ShareRequested {
    pub title: String,
    pub text: String,
    pub files: Vec<String>,
}
