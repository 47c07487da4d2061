//! Output formatting for validation results.
//!
//! This module handles everything shown to the user:
//! - [`summary`] - The plain-text configuration summary
//! - [`clipboard`] - Injected clipboard capability and copy status
//! - [`terminal`] - Terminal and JSON rendering of findings

mod clipboard;
mod summary;
mod terminal;

pub use clipboard::{
    copy_summary, ClipboardWriter, CopyStatus, FileClipboard, MemoryClipboard,
    COPY_STATUS_CLEAR_DELAY,
};
pub use summary::format_summary;
pub use terminal::{format_label, print_report, render_report, report_json};
