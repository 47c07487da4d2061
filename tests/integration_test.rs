//! Integration tests for ipconf-check
//!
//! These tests drive the public API from raw configuration text to findings
//! and summary.

use ipconf_check::models::{ConfigType, Configuration, DnsServers, Field, Finding, IpVersion};
use ipconf_check::output::{format_summary, MemoryClipboard, CopyStatus};
use ipconf_check::processing::{edge_case_check, resolve_subnet_text, same_subnet, validate, EdgeCase};
use ipconf_check::settings::config_from_file;
use ipconf_check::{check_configuration, copy_configuration};
use std::path::Path;

fn static_config(ip: &str, subnet: &str, gateway: &str, dns: &[&str]) -> Configuration {
    Configuration::new_static(ip, subnet, gateway)
        .with_dns_servers(DnsServers::from_entries(dns.iter().copied()).expect("1-3 DNS entries"))
}

#[test]
fn test_private_ipv4_with_prefix() {
    let config = static_config("192.168.1.10", "24", "192.168.1.1", &["192.168.1.1"]);
    let (report, summary) = check_configuration(&config);

    assert!(report.blocking().is_empty(), "{:?}", report.blocking());
    assert_eq!(edge_case_check("192.168.1.1", "24"), None);
    assert_eq!(
        summary.as_deref(),
        Some("IP Address: 192.168.1.10\nSubnet Mask: 24\nGateway: 192.168.1.1\nDNS Servers: 192.168.1.1")
    );
}

#[test]
fn test_network_address_is_blocking() {
    let config = static_config("192.168.1.0", "24", "192.168.1.1", &["8.8.8.8"]);
    let (report, summary) = check_configuration(&config);

    assert_eq!(
        report.for_field(Field::IpAddress),
        vec![&Finding::NetworkAddressConflict {
            field: Field::IpAddress
        }]
    );
    assert!(summary.is_none());
}

#[test]
fn test_gateway_on_network_or_broadcast_is_blocking() {
    let config = static_config("192.168.1.10", "24", "192.168.1.0", &["8.8.8.8"]);
    let (report, summary) = check_configuration(&config);
    assert_eq!(
        report.for_field(Field::Gateway),
        vec![&Finding::NetworkAddressConflict {
            field: Field::Gateway
        }]
    );
    assert!(report.for_field(Field::IpAddress).is_empty());
    assert!(summary.is_none());

    let config = static_config("192.168.1.10", "24", "192.168.1.255", &["8.8.8.8"]);
    let (report, summary) = check_configuration(&config);
    assert_eq!(
        report.blocking(),
        vec![&Finding::BroadcastAddressConflict {
            field: Field::Gateway
        }]
    );
    assert!(summary.is_none());
    assert_eq!(edge_case_check("192.168.1.255", "24"), Some(EdgeCase::BroadcastAddress));
}

#[test]
fn test_dotted_mask_same_as_prefix() {
    assert_eq!(resolve_subnet_text("255.255.255.0", "192.168.1.10").unwrap().value(), 24);

    let dotted = validate(&static_config("192.168.1.10", "255.255.255.0", "192.168.1.1", &[""]));
    let prefix = validate(&static_config("192.168.1.10", "24", "192.168.1.1", &[""]));
    assert_eq!(dotted.findings(), prefix.findings());
}

#[test]
fn test_public_address_warns_only() {
    let config = static_config("8.8.8.8", "24", "8.8.8.1", &["1.1.1.1"]);
    let (report, summary) = check_configuration(&config);

    assert_eq!(report.warnings(), vec![&Finding::PublicAddressWarning]);
    assert!(!report.has_blocking());
    assert!(summary.is_some());
}

#[test]
fn test_ipv6_address_with_ipv4_gateway() {
    let config = static_config("2001:db8::1", "64", "192.168.1.1", &[""]);
    let report = validate(&config);

    assert_eq!(
        report.gateway_relation,
        Some(Finding::VersionMismatch {
            address: IpVersion::V6,
            gateway: IpVersion::V4
        })
    );
    assert!(!same_subnet("2001:db8::1", "192.168.1.1", "64"));
    assert!(report.has_blocking());
}

#[test]
fn test_dns_warnings() {
    let blank = validate(&static_config("192.168.1.10", "24", "192.168.1.1", &["", ""]));
    assert_eq!(blank.dns_servers, Some(Finding::NoDnsWarning));
    assert!(blank.is_complete_and_valid());

    let bad = validate(&static_config("192.168.1.10", "24", "192.168.1.1", &["not-an-ip"]));
    assert_eq!(bad.dns_servers, None);
    assert_eq!(
        bad.for_field(Field::Dns(0)),
        vec![&Finding::InvalidFormat { field: Field::Dns(0) }]
    );
    assert!(!bad.is_complete_and_valid());
}

#[test]
fn test_point_to_point_links() {
    assert_eq!(edge_case_check("10.0.0.0", "31"), None);
    assert_eq!(edge_case_check("10.0.0.1", "31"), None);
    assert_eq!(edge_case_check("10.0.0.0", "30"), Some(EdgeCase::NetworkAddress));
    assert_eq!(edge_case_check("2001:db8::", "127"), None);
    assert_eq!(edge_case_check("2001:db8::", "126"), Some(EdgeCase::NetworkAddress));
}

#[test]
fn test_dhcp_mode() {
    let mut config = static_config("garbage", "", "", &["bad"]);
    config.config_type = ConfigType::Dhcp;
    let (report, summary) = check_configuration(&config);

    assert!(report.findings().is_empty());
    assert!(summary.is_none());
}

#[test]
fn test_config_file_ipv4() {
    let config = config_from_file(Path::new("tests/test_data/static_ipv4.json"))
        .expect("Failed to read config file");
    assert_eq!(config.config_type, ConfigType::Static);

    let (report, summary) = check_configuration(&config);
    assert!(report.findings().is_empty(), "{:?}", report.findings());
    assert_eq!(
        summary.expect("valid config has a summary").lines().last(),
        Some("DNS Servers: 192.168.1.1, 8.8.8.8")
    );
}

#[test]
fn test_config_file_ipv6_bad_gateway() {
    let config = config_from_file(Path::new("tests/test_data/static_ipv6_bad_gateway.json"))
        .expect("Failed to read config file");
    let report = validate(&config);

    assert_eq!(report.blocking().len(), 1);
    assert_eq!(report.warnings(), vec![&Finding::NoDnsWarning]);
}

#[test]
fn test_copy_configuration() {
    let mut clipboard = MemoryClipboard::default();
    let config = static_config("10.1.2.3", "255.255.0.0", "10.1.0.1", &["10.1.0.53"]);

    assert_eq!(copy_configuration(&config, &mut clipboard), Some(CopyStatus::Copied));
    assert_eq!(clipboard.contents.as_deref(), Some(format_summary(&config).as_str()));

    let mut clipboard = MemoryClipboard::default();
    let invalid = static_config("10.1.2.3", "255.0.255.0", "10.1.0.1", &[""]);
    assert_eq!(copy_configuration(&invalid, &mut clipboard), None);
    assert!(clipboard.contents.is_none());
}
