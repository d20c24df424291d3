//! Forwards engine progress events onto the UI event loop
//!
//! Progress notifications arrive from the download task's context; they
//! cross over to the UI as messages (Tauri events) rather than by mutating
//! UI-bound state from a foreign context.

use stream_dl::ProgressReceiver;
use tauri::{AppHandle, Emitter};
use tokio::sync::watch;

use super::types::DownloadProgress;

/// Subscribe the UI to streamed download progress.
///
/// Consumes the engine's progress channel, recomputes each notification as
/// a completion fraction, keeps the latest value in a watch cell (queryable
/// from commands) and emits it to the webview as `download-progress`.
pub fn spawn_progress_forwarder(
    app: AppHandle,
    mut events: ProgressReceiver,
) -> watch::Receiver<f64> {
    let (gauge, fraction_cell) = watch::channel(0.0);

    tauri::async_runtime::spawn(async move {
        while let Some(status) = events.recv().await {
            let fraction = status.fraction();
            log::debug!(
                "download progress {:.3} ({} / {} bytes)",
                fraction,
                status.bytes,
                status.content_length
            );
            let _ = gauge.send_replace(fraction);
            let _ = app.emit(
                "download-progress",
                DownloadProgress {
                    fraction,
                    bytes: status.bytes,
                    content_length: status.content_length,
                },
            );
        }
    });

    fraction_cell
}
