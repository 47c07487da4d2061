//! Static IP configuration validator.
//!
//! Parses an address, subnet, gateway and DNS servers as typed by a user,
//! checks them against each other for IPv4 and IPv6, and renders a summary.
//!
//! ```
//! use ipconf_check::models::Configuration;
//! use ipconf_check::processing::validate;
//! let report = validate(&Configuration::new_static("192.168.1.10", "24", "192.168.1.1"));
//! assert!(report.is_complete_and_valid());
//! ```

pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod settings;

use models::Configuration;
use output::{copy_summary, format_summary, ClipboardWriter, CopyStatus};
use processing::{validate, ValidationReport};

/// Validate a configuration and, if it is complete, render its summary.
///
/// The summary is `None` when the form still has blocking findings or DHCP
/// is selected.
pub fn check_configuration(config: &Configuration) -> (ValidationReport, Option<String>) {
    let report = validate(config);
    let summary = report
        .is_complete_and_valid()
        .then(|| format_summary(config));
    (report, summary)
}

/// Copy the summary of a valid configuration through `writer`.
///
/// Returns `None` without touching the writer when there is nothing to copy.
pub fn copy_configuration<W: ClipboardWriter + ?Sized>(
    config: &Configuration,
    writer: &mut W,
) -> Option<CopyStatus> {
    let (_report, summary) = check_configuration(config);
    summary.map(|text| copy_summary(writer, &text))
}
