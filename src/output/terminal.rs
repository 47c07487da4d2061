//! Terminal output utilities.
//!
//! Renders a [`ValidationReport`] as coloured lines, one per finding, grouped
//! under the field they belong to.

use crate::models::{ConfigType, Field, Finding, Severity};
use crate::processing::ValidationReport;
use colored::Colorize;

/// Width of the field label column.
const LABEL_WIDTH: usize = 14;

/// Format a value as a left-aligned label followed by a colon.
///
/// # Arguments
/// * `value` - The label text
/// * `width` - The minimum width of the label column
///
/// # Returns
/// A padded `label:` string
pub fn format_label<T: ToString>(value: T, width: usize) -> String {
    let label = format!("{}:", value.to_string());
    format!("{label:<width$}")
}

/// The order fields are shown in, DNS slots expanded.
fn field_order(report: &ValidationReport) -> Vec<Field> {
    let mut fields = vec![Field::IpAddress, Field::Subnet, Field::Gateway];
    fields.extend((0..report.dns_entries.len()).map(Field::Dns));
    fields.push(Field::DnsServers);
    fields
}

fn render_finding(field: Field, finding: &Finding) -> String {
    let label = format_label(field, LABEL_WIDTH);
    match finding.severity() {
        Severity::Blocking => format!("{} {label} {finding}", "[-]".red().bold()),
        Severity::Advisory => format!("{} {label} {finding}", "[*]".yellow().bold()),
    }
}

/// Build the report lines without printing them.
pub fn render_report(report: &ValidationReport) -> Vec<String> {
    if report.config_type == ConfigType::Dhcp {
        return vec![format!(
            "{} DHCP configuration is selected. The bridge will obtain network settings automatically.",
            "[+]".green().bold()
        )];
    }

    let mut lines: Vec<String> = field_order(report)
        .into_iter()
        .flat_map(|field| {
            report
                .for_field(field)
                .into_iter()
                .map(move |finding| render_finding(field, finding))
        })
        .collect();

    if report.is_complete_and_valid() {
        lines.push(format!(
            "{} Configuration is complete and valid.",
            "[+]".green().bold()
        ));
    } else {
        lines.push(format!(
            "{} Fix {} error(s) before generating a summary.",
            "[-]".red().bold(),
            report.blocking().len()
        ));
    }
    lines
}

/// Print the report to stdout.
pub fn print_report(report: &ValidationReport) {
    for line in render_report(report) {
        println!("{line}");
    }
}

/// The report as JSON, with a message and severity next to each finding.
pub fn report_json(report: &ValidationReport) -> serde_json::Value {
    let findings: Vec<serde_json::Value> = report
        .findings()
        .into_iter()
        .map(|finding| {
            serde_json::json!({
                "finding": finding,
                "field": finding.field(),
                "fields": finding.fields(),
                "severity": finding.severity(),
                "message": finding.to_string(),
            })
        })
        .collect();
    serde_json::json!({
        "config_type": report.config_type,
        "complete_and_valid": report.is_complete_and_valid(),
        "findings": findings,
    })
}
