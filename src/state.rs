//! Application state shared across Tauri commands

use std::sync::Arc;
use stream_dl::{progress_channel, DownloadWorkflow, LocalStorage};
use tauri::{AppHandle, Manager};
use tokio::sync::watch;

use crate::pdf::delivery::{SystemOpener, WebviewShare};
use crate::pdf::progress::spawn_progress_forwarder;

/// Application state with the shared download workflow.
///
/// Managed by Tauri and accessible to all commands via
/// `tauri::State<'_, AppState>`.
pub struct AppState {
    pub workflow: Arc<DownloadWorkflow>,
    /// Latest progress fraction published by the forwarder
    pub progress: watch::Receiver<f64>,
}

impl AppState {
    /// Wire the download engine to the host: cache-scoped storage, the
    /// webview share presenter, the system opener, and the progress
    /// subscription (installed here, once, before any download starts).
    pub fn initialize(app: AppHandle) -> AppState {
        let cache_dir = app
            .path()
            .app_cache_dir()
            .expect("Failed to get app cache dir");
        let data_dir = app
            .path()
            .app_data_dir()
            .expect("Failed to get app data dir");
        let temp_dir = app.path().temp_dir().expect("Failed to get temp dir");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create app cache dir");
        std::fs::create_dir_all(&data_dir).expect("Failed to create app data dir");

        let (progress_tx, progress_rx) = progress_channel();
        let storage =
            LocalStorage::new(cache_dir, data_dir, temp_dir).with_progress(progress_tx);
        let progress = spawn_progress_forwarder(app.clone(), progress_rx);

        let workflow = DownloadWorkflow::new(
            Arc::new(storage),
            Arc::new(WebviewShare::new(app.clone())),
            Arc::new(SystemOpener::new(app)),
        );

        AppState {
            workflow: Arc::new(workflow),
            progress,
        }
    }
}
