//! Copying the summary somewhere else.
//!
//! The core never touches a platform clipboard. Callers inject a
//! [`ClipboardWriter`] and get back a [`CopyStatus`] to show for
//! [`COPY_STATUS_CLEAR_DELAY`].

use crate::error::ClipboardError;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// How long a copy notification stays visible.
pub const COPY_STATUS_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Something that can take the summary text.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Outcome of a copy, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn message(&self) -> &'static str {
        match self {
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Failed to copy!",
        }
    }

    pub fn clear_after(&self) -> Duration {
        COPY_STATUS_CLEAR_DELAY
    }
}

/// Hand `text` to the writer and turn the result into a status.
pub fn copy_summary<W: ClipboardWriter + ?Sized>(writer: &mut W, text: &str) -> CopyStatus {
    match writer.write_text(text) {
        Ok(()) => {
            log::debug!("copied {} bytes", text.len());
            CopyStatus::Copied
        }
        Err(e) => {
            log::warn!("copy failed: {e}");
            CopyStatus::Failed
        }
    }
}

/// Writes the text to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    pub path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> FileClipboard {
        FileClipboard { path: path.into() }
    }
}

impl ClipboardWriter for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Keeps the last text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
