//! Plain-text configuration summary.

use crate::models::Configuration;
use itertools::Itertools;

/// Render the summary block shown to the user and copied to the clipboard.
///
/// No validation happens here; an incomplete configuration renders with
/// empty values.
///
/// # Examples
/// ```
/// use ipconf_check::models::Configuration;
/// use ipconf_check::output::format_summary;
/// let config = Configuration::new_static("192.168.1.10", "24", "192.168.1.1");
/// assert_eq!(
///     format_summary(&config),
///     "IP Address: 192.168.1.10\nSubnet Mask: 24\nGateway: 192.168.1.1\nDNS Servers: None"
/// );
/// ```
pub fn format_summary(config: &Configuration) -> String {
    let dns = config.dns_servers.non_blank().join(", ");
    let dns = if dns.is_empty() { "None".to_string() } else { dns };
    format!(
        "IP Address: {ip}\nSubnet Mask: {subnet}\nGateway: {gateway}\nDNS Servers: {dns}",
        ip = config.ip_address,
        subnet = config.subnet,
        gateway = config.gateway,
    )
}
