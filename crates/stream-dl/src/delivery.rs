//! Share presenter and file opener seams
//!
//! Both are host capabilities, not things this crate implements: the engine
//! hands a finished artifact across one of these seams and moves on.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::FetchError;

/// Title used for every share request.
pub const SHARE_TITLE: &str = "Share PDF";

/// Caption used for every share request.
pub const SHARE_TEXT: &str = "Share the PDF";

/// A share-sheet request: title, caption, and the local files to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub files: Vec<PathBuf>,
}

impl ShareRequest {
    /// The fixed-title, fixed-text request for a single downloaded PDF.
    pub fn for_file(path: PathBuf) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            files: vec![path],
        }
    }
}

/// Presents the platform share affordance for local files.
#[async_trait]
pub trait SharePresenter: Send + Sync {
    async fn share(&self, request: ShareRequest) -> Result<(), FetchError>;
}

/// Opens a local file with an external viewer.
#[async_trait]
pub trait FileOpener: Send + Sync {
    /// Hand the file to the platform's default handler for its type.
    async fn open_with_default(&self, path: &Path) -> Result<(), FetchError>;
}
