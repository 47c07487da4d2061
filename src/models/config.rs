//! User-entered network configuration.

use serde::{Deserialize, Serialize};

/// Smallest number of DNS entry slots kept in a [`DnsServers`] list.
pub const MIN_DNS_SERVERS: usize = 1;
/// Largest number of DNS entry slots a [`DnsServers`] list may hold.
pub const MAX_DNS_SERVERS: usize = 3;

/// How the interface obtains its settings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    #[default]
    Dhcp,
    Static,
}

/// Ordered DNS server entries, between one and three slots.
///
/// Slots hold raw text; blank slots are allowed and mean "not set".
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct DnsServers {
    entries: Vec<String>,
}

impl Default for DnsServers {
    fn default() -> Self {
        DnsServers {
            entries: vec![String::new()],
        }
    }
}

impl DnsServers {
    /// Build a list from existing entries.
    ///
    /// Returns `None` when the count is outside 1..=3. An empty input gives a
    /// single blank slot.
    pub fn from_entries<I, S>(entries: I) -> Option<DnsServers>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            entries.push(String::new());
        }
        if entries.len() > MAX_DNS_SERVERS {
            return None;
        }
        Some(DnsServers { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A list always has at least one slot, but every slot may be blank.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|dns| dns.trim().is_empty())
    }

    /// Entries with something other than whitespace in them.
    pub fn non_blank(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|dns| !dns.trim().is_empty())
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_DNS_SERVERS
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > MIN_DNS_SERVERS
    }

    /// Append a blank slot. Returns false when the list is full.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            log::debug!("DNS list already has {MAX_DNS_SERVERS} entries");
            return false;
        }
        self.entries.push(String::new());
        true
    }

    /// Remove the slot at `index`. The last remaining slot cannot be removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Replace the text of the slot at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}

impl<'de> Deserialize<'de> for DnsServers {
    fn deserialize<D>(deserializer: D) -> Result<DnsServers, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<String>::deserialize(deserializer)?;
        let count = entries.len();
        DnsServers::from_entries(entries).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "expected at most {MAX_DNS_SERVERS} DNS servers, got {count}"
            ))
        })
    }
}

/// A network configuration as typed by the user.
///
/// Fields hold raw text; nothing here is validated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Configuration {
    pub config_type: ConfigType,
    pub ip_address: String,
    pub subnet: String,
    pub gateway: String,
    pub dns_servers: DnsServers,
}

impl Configuration {
    /// A static configuration with a single DNS slot.
    pub fn new_static(ip_address: &str, subnet: &str, gateway: &str) -> Configuration {
        Configuration {
            config_type: ConfigType::Static,
            ip_address: ip_address.to_string(),
            subnet: subnet.to_string(),
            gateway: gateway.to_string(),
            dns_servers: DnsServers::default(),
        }
    }

    pub fn dhcp() -> Configuration {
        Configuration::default()
    }

    pub fn with_dns_servers(mut self, dns_servers: DnsServers) -> Configuration {
        self.dns_servers = dns_servers;
        self
    }

    pub fn is_static(&self) -> bool {
        self.config_type == ConfigType::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_capacity() {
        let mut dns = DnsServers::default();
        assert_eq!(dns.len(), 1);
        assert!(!dns.remove(0), "last slot must stay");
        assert!(dns.add());
        assert!(dns.add());
        assert!(!dns.add(), "no fourth slot");
        assert_eq!(dns.len(), 3);
        assert!(dns.remove(1));
        assert_eq!(dns.len(), 2);
        assert!(!dns.remove(5));
    }

    #[test]
    fn test_dns_set_and_non_blank() {
        let mut dns = DnsServers::default();
        assert!(dns.is_empty());
        assert!(dns.set(0, "8.8.8.8"));
        assert!(!dns.set(1, "1.1.1.1"));
        dns.add();
        dns.set(1, "   ");
        assert!(!dns.is_empty());
        assert_eq!(dns.non_blank().collect::<Vec<_>>(), vec!["8.8.8.8"]);
    }

    #[test]
    fn test_dns_from_entries_bounds() {
        assert_eq!(DnsServers::from_entries(Vec::<String>::new()).unwrap().len(), 1);
        assert!(DnsServers::from_entries(["a", "b", "c"]).is_some());
        assert!(DnsServers::from_entries(["a", "b", "c", "d"]).is_none());
    }

    #[test]
    fn test_configuration_json() {
        let json = r#"{
            "config_type": "static",
            "ip_address": "192.168.1.10",
            "subnet": "24",
            "gateway": "192.168.1.1",
            "dns_servers": ["8.8.8.8", ""]
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert!(config.is_static());
        assert_eq!(config.dns_servers.entries(), ["8.8.8.8", ""]);

        let too_many = r#"{"dns_servers": ["a", "b", "c", "d"]}"#;
        assert!(serde_json::from_str::<Configuration>(too_many).is_err());

        let defaults: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, Configuration::dhcp());
    }
}
