//! Progress events and the subscription channel
//!
//! A streamed download reports `{url, bytes, content_length}` notifications
//! through an unbounded channel. The subscription is scoped: dropping the
//! receiver revokes it, and senders treat a revoked subscription as a no-op.

use serde::Serialize;
use tokio::sync::mpsc;

/// Progress notification emitted while a streamed download is active.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressStatus {
    pub url: String,
    pub bytes: u64,
    pub content_length: u64,
}

impl ProgressStatus {
    /// Completed fraction in [0.0, 1.0] as reported by the provider.
    ///
    /// 0.0 when the content length is unknown (the server sent no length),
    /// so an indeterminate transfer never produces NaN or a bogus fraction.
    pub fn fraction(&self) -> f64 {
        if self.content_length == 0 {
            return 0.0;
        }
        self.bytes as f64 / self.content_length as f64
    }
}

/// Create a progress subscription.
///
/// The sender side is handed to the storage provider before any download
/// starts; the receiver side is consumed by whoever owns the UI-facing
/// progress state.
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressSender { tx }, ProgressReceiver { rx })
}

/// Publishing half of a progress subscription.
#[derive(Debug, Clone)]
pub struct ProgressSender {
    tx: mpsc::UnboundedSender<ProgressStatus>,
}

impl ProgressSender {
    /// Publish one notification. Best-effort: once the receiver is gone the
    /// event is dropped silently.
    pub fn publish(&self, status: ProgressStatus) {
        let _ = self.tx.send(status);
    }
}

/// Consuming half of a progress subscription.
#[derive(Debug)]
pub struct ProgressReceiver {
    rx: mpsc::UnboundedReceiver<ProgressStatus>,
}

impl ProgressReceiver {
    /// Wait for the next notification. `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<ProgressStatus> {
        self.rx.recv().await
    }

    /// Drain one already-delivered notification without waiting.
    pub fn try_recv(&mut self) -> Option<ProgressStatus> {
        self.rx.try_recv().ok()
    }
}
