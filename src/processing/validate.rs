//! Validation pass over a whole [`Configuration`].
//!
//! Every check runs on every pass and lands in its own slot of a
//! [`ValidationReport`]; nothing returns early, so all applicable findings
//! are reported together. DHCP configurations produce an empty report.

use super::classify::is_public;
use super::relationship::{edge_case_for, same_subnet_addr};
use super::subnet::resolve_subnet;
use crate::models::{parse_address, ConfigType, Configuration, Field, Finding};
use itertools::Itertools;
use serde::Serialize;

/// Result of validating one configuration.
///
/// Each slot holds at most one finding for one check, so a report has the
/// same shape whatever the input was.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub config_type: ConfigType,
    /// Required / format problem with the address.
    pub ip_address: Option<Finding>,
    /// Required / format problem with the subnet.
    pub subnet: Option<Finding>,
    /// Required / format problem with the gateway.
    pub gateway: Option<Finding>,
    /// Address is the network or broadcast address of its subnet.
    pub ip_subnet: Option<Finding>,
    /// Address is globally routable.
    pub ip_public: Option<Finding>,
    /// Gateway version mismatch, or gateway outside the subnet.
    pub gateway_relation: Option<Finding>,
    /// Gateway is the network or broadcast address of the subnet.
    pub gateway_subnet: Option<Finding>,
    /// One slot per DNS entry.
    pub dns_entries: Vec<Option<Finding>>,
    /// Every DNS entry is blank.
    pub dns_servers: Option<Finding>,
}

impl ValidationReport {
    /// All findings in display order.
    pub fn findings(&self) -> Vec<&Finding> {
        [
            &self.ip_address,
            &self.ip_subnet,
            &self.ip_public,
            &self.subnet,
            &self.gateway,
            &self.gateway_relation,
            &self.gateway_subnet,
        ]
        .into_iter()
        .chain(self.dns_entries.iter())
        .chain(std::iter::once(&self.dns_servers))
        .flatten()
        .collect()
    }

    pub fn blocking(&self) -> Vec<&Finding> {
        self.findings()
            .into_iter()
            .filter(|finding| finding.is_blocking())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Finding> {
        self.findings()
            .into_iter()
            .filter(|finding| !finding.is_blocking())
            .collect()
    }

    /// Findings shown under one field.
    pub fn for_field(&self, field: Field) -> Vec<&Finding> {
        self.findings()
            .into_iter()
            .filter(|finding| finding.field() == field)
            .collect()
    }

    pub fn has_blocking(&self) -> bool {
        self.findings().iter().any(|finding| finding.is_blocking())
    }

    /// True when a summary may be generated: static mode and no blocking
    /// findings. Required-field checks make this imply all three fields
    /// are filled in.
    pub fn is_complete_and_valid(&self) -> bool {
        self.config_type == ConfigType::Static && !self.has_blocking()
    }
}

/// Run every check against a configuration.
///
/// # Examples
/// ```
/// use ipconf_check::models::{Configuration, Field, Finding};
/// use ipconf_check::processing::validate;
/// let config = Configuration::new_static("192.168.1.0", "24", "192.168.1.1");
/// let report = validate(&config);
/// assert_eq!(
///     report.ip_subnet,
///     Some(Finding::NetworkAddressConflict { field: Field::IpAddress })
/// );
/// assert!(!report.is_complete_and_valid());
/// ```
pub fn validate(config: &Configuration) -> ValidationReport {
    if config.config_type == ConfigType::Dhcp {
        log::debug!("DHCP selected, nothing to validate");
        return ValidationReport {
            config_type: ConfigType::Dhcp,
            ..Default::default()
        };
    }
    log::info!(
        "#Start validate() ip={:?} subnet={:?} gateway={:?}",
        config.ip_address,
        config.subnet,
        config.gateway
    );

    let ip = parse_address(&config.ip_address).ok();
    let prefix = resolve_subnet(&config.subnet, ip.as_ref()).ok();
    let gateway = parse_address(&config.gateway).ok();

    let ip_address = presence_or_format(&config.ip_address, ip.is_some(), Field::IpAddress);
    let subnet = presence_or_format(&config.subnet, prefix.is_some(), Field::Subnet);
    let gateway_finding = presence_or_format(&config.gateway, gateway.is_some(), Field::Gateway);

    let ip_subnet = match (&ip, prefix) {
        (Some(ip), Some(prefix)) => {
            edge_case_for(ip, prefix).map(|edge| edge.finding(Field::IpAddress))
        }
        _ => None,
    };

    let ip_public = ip
        .as_ref()
        .filter(|ip| is_public(ip))
        .map(|_| Finding::PublicAddressWarning);

    let gateway_relation = match (&ip, prefix, &gateway) {
        (Some(ip), Some(prefix), Some(gateway)) => {
            if ip.version() != gateway.version() {
                Some(Finding::VersionMismatch {
                    address: ip.version(),
                    gateway: gateway.version(),
                })
            } else if !same_subnet_addr(ip, gateway, prefix) {
                Some(Finding::SubnetMismatchWarning)
            } else {
                None
            }
        }
        _ => None,
    };

    // Only a gateway inside the address's subnet can hit its edge cases.
    let gateway_subnet = match (&ip, prefix, &gateway) {
        (Some(ip), Some(prefix), Some(gateway)) if same_subnet_addr(ip, gateway, prefix) => {
            edge_case_for(gateway, prefix).map(|edge| edge.finding(Field::Gateway))
        }
        _ => None,
    };

    let dns_entries = config
        .dns_servers
        .entries()
        .iter()
        .enumerate()
        .map(|(index, dns)| {
            if !dns.trim().is_empty() && parse_address(dns).is_err() {
                Some(Finding::InvalidFormat {
                    field: Field::Dns(index),
                })
            } else {
                None
            }
        })
        .collect();

    let dns_servers = config
        .dns_servers
        .is_empty()
        .then_some(Finding::NoDnsWarning);

    let report = ValidationReport {
        config_type: ConfigType::Static,
        ip_address,
        subnet,
        gateway: gateway_finding,
        ip_subnet,
        ip_public,
        gateway_relation,
        gateway_subnet,
        dns_entries,
        dns_servers,
    };

    if report.has_blocking() {
        log::warn!(
            "validation blocked: {}",
            report.blocking().iter().map(|f| f.to_string()).join(" ")
        );
    }
    log::info!(
        "#End validate() {} finding(s), complete_and_valid={}",
        report.findings().len(),
        report.is_complete_and_valid()
    );
    report
}

/// `FieldRequired` for empty text, `InvalidFormat` when it did not parse.
fn presence_or_format(text: &str, parsed: bool, field: Field) -> Option<Finding> {
    if text.is_empty() {
        Some(Finding::FieldRequired { field })
    } else if !parsed {
        Some(Finding::InvalidFormat { field })
    } else {
        None
    }
}
