//! PDF Tauri commands

use tauri::{AppHandle, Emitter, State};

use super::types::DownloadStatusChanged;
use super::{FETCHED_PDF_NAME, LARGE_PDF_URL, SMALL_PDF_URL, STREAMED_PDF_NAME};
use crate::state::AppState;

/// Download a large PDF with the streaming engine and share it.
///
/// Bytes are written straight to cache storage (the payload never crosses
/// into this process's memory wholesale), so large files work and progress
/// is reported while the transfer runs.
#[tauri::command]
pub async fn download_and_share(
    app: AppHandle,
    state: State<'_, AppState>,
    url: Option<String>,
) -> Result<String, String> {
    let url = url.unwrap_or_else(|| LARGE_PDF_URL.to_string());

    let _ = app.emit(
        "download-status-changed",
        DownloadStatusChanged {
            status: "downloading".to_string(),
            error: None,
        },
    );

    match state
        .workflow
        .download_and_share(&url, STREAMED_PDF_NAME)
        .await
    {
        Ok(path) => {
            let _ = app.emit(
                "download-status-changed",
                DownloadStatusChanged {
                    status: "completed".to_string(),
                    error: None,
                },
            );
            Ok(path.display().to_string())
        }
        Err(e) => {
            let _ = app.emit(
                "download-status-changed",
                DownloadStatusChanged {
                    status: "failed".to_string(),
                    error: Some(e.to_string()),
                },
            );
            Err(e.to_string())
        }
    }
}

/// Download a small PDF in memory and share it.
///
/// The whole body is materialized in memory before being written, which
/// caps the practical file size.
#[tauri::command]
pub async fn get_and_share(
    state: State<'_, AppState>,
    url: Option<String>,
) -> Result<String, String> {
    let url = url.unwrap_or_else(|| SMALL_PDF_URL.to_string());

    state
        .workflow
        .get_and_share(&url, FETCHED_PDF_NAME)
        .await
        .map(|uri| uri.display().to_string())
        .map_err(|e| e.to_string())
}

/// Download a PDF and open it with the platform's default viewer.
#[tauri::command]
pub async fn download_and_open(
    state: State<'_, AppState>,
    url: Option<String>,
) -> Result<String, String> {
    let url = url.unwrap_or_else(|| SMALL_PDF_URL.to_string());

    state
        .workflow
        .download_and_open(&url, STREAMED_PDF_NAME)
        .await
        .map(|path| path.display().to_string())
        .map_err(|e| e.to_string())
}

/// Latest progress fraction published for the active streamed download.
#[tauri::command]
pub fn current_progress(state: State<'_, AppState>) -> f64 {
    *state.progress.borrow()
}
