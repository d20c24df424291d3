//! PDF download-and-deliver feature
//!
//! Three ways to get a PDF onto disk and in front of the user:
//! - Streamed download + share (large files, with progress)
//! - In-memory download + share (small files)
//! - Download + open with the default viewer
//!
//! The heavy lifting lives in the `stream-dl` engine crate; this module
//! wires it to Tauri commands, events and plugins.

pub mod commands;
pub(crate) mod delivery;
pub(crate) mod progress;
mod types;

// Small PDF
pub const SMALL_PDF_URL: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

// Large PDF (~25mb), big enough to watch the progress bar move
pub const LARGE_PDF_URL: &str = "https://research.nhm.org/pdfs/10840/10840.pdf";

/// Cache filename used by the streamed download operations
pub(crate) const STREAMED_PDF_NAME: &str = "mypdf.pdf";

/// Cache filename used by the in-memory download operation
pub(crate) const FETCHED_PDF_NAME: &str = "my-pdf.pdf";
