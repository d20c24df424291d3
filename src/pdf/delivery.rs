//! Tauri-backed implementations of the delivery seams

use async_trait::async_trait;
use std::path::Path;
use stream_dl::{FetchError, FileOpener, SharePresenter, ShareRequest};
use tauri::{AppHandle, Emitter};
use tauri_plugin_opener::OpenerExt;

use super::types::ShareRequested;

/// Presents the share affordance by handing the request to the webview,
/// which drives the platform share sheet (navigator.share).
pub struct WebviewShare {
    app: AppHandle,
}

impl WebviewShare {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait]
impl SharePresenter for WebviewShare {
    async fn share(&self, request: ShareRequest) -> Result<(), FetchError> {
        let payload = ShareRequested {
            title: request.title,
            text: request.text,
            files: request
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        };
        self.app
            .emit("share-requested", payload)
            .map_err(|e| FetchError::Share(e.to_string()))
    }
}

/// Opens a local artifact with the platform's default handler for its type.
pub struct SystemOpener {
    app: AppHandle,
}

impl SystemOpener {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait]
impl FileOpener for SystemOpener {
    async fn open_with_default(&self, path: &Path) -> Result<(), FetchError> {
        self.app
            .opener()
            .open_path(path.display().to_string(), None::<&str>)
            .map_err(|e| FetchError::Open(e.to_string()))
    }
}
