//! Download-and-deliver engine
//!
//! This crate is organized into submodules:
//! - `error`: Engine error type
//! - `progress`: Progress events and the subscription channel
//! - `storage`: Scoped-directory storage provider (streamed downloads, raw writes)
//! - `http`: Single-shot in-memory GET
//! - `delivery`: Share presenter and file opener seams
//! - `workflow`: The download-and-deliver operations

pub mod delivery;
pub mod error;
pub mod http;
pub mod progress;
pub mod storage;
pub mod workflow;

// Re-export the error type
pub use error::FetchError;

// Re-export progress types
pub use progress::{progress_channel, ProgressReceiver, ProgressSender, ProgressStatus};

// Re-export storage types
pub use storage::{Directory, DownloadRequest, LocalStorage, StorageProvider};

// Re-export delivery seams
pub use delivery::{FileOpener, SharePresenter, ShareRequest, SHARE_TEXT, SHARE_TITLE};

// Re-export the workflow
pub use workflow::DownloadWorkflow;
