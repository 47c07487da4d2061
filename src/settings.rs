//! Loading a [`Configuration`] from the environment or a JSON file.
//!
//! Environment variables (a `.env` file is honoured through `dotenv`):
//! - `IPCONF_MODE` - `dhcp` or `static`
//! - `IPCONF_ADDRESS`, `IPCONF_SUBNET`, `IPCONF_GATEWAY`
//! - `IPCONF_DNS` - comma separated, at most three entries

use crate::error::SettingsError;
use crate::models::{ConfigType, Configuration, DnsServers};
use std::path::Path;

pub const ENV_MODE: &str = "IPCONF_MODE";
pub const ENV_ADDRESS: &str = "IPCONF_ADDRESS";
pub const ENV_SUBNET: &str = "IPCONF_SUBNET";
pub const ENV_GATEWAY: &str = "IPCONF_GATEWAY";
pub const ENV_DNS: &str = "IPCONF_DNS";

/// Parse a mode name, case-insensitive.
pub fn parse_mode(mode: &str) -> Result<ConfigType, SettingsError> {
    match mode.trim().to_ascii_lowercase().as_str() {
        "dhcp" => Ok(ConfigType::Dhcp),
        "static" => Ok(ConfigType::Static),
        _ => Err(SettingsError::UnknownMode(mode.to_string())),
    }
}

/// Split a comma separated DNS list into slots.
///
/// Entries are kept as typed apart from surrounding whitespace; empty input
/// gives one blank slot.
pub fn parse_dns_list(list: &str) -> Result<DnsServers, SettingsError> {
    let entries: Vec<&str> = if list.trim().is_empty() {
        Vec::new()
    } else {
        list.split(',').map(str::trim).collect()
    };
    let count = entries.len();
    DnsServers::from_entries(entries).ok_or(SettingsError::TooManyDns(count))
}

/// Build a configuration from a variable lookup.
///
/// Missing variables leave the field empty. The mode defaults to static
/// when an address is given and to DHCP otherwise.
pub fn config_from_lookup<F>(lookup: F) -> Result<Configuration, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let ip_address = lookup(ENV_ADDRESS).unwrap_or_default();
    let config_type = match lookup(ENV_MODE) {
        Some(mode) => parse_mode(&mode)?,
        None if !ip_address.is_empty() => ConfigType::Static,
        None => ConfigType::Dhcp,
    };
    let dns_servers = match lookup(ENV_DNS) {
        Some(list) => parse_dns_list(&list)?,
        None => DnsServers::default(),
    };
    Ok(Configuration {
        config_type,
        ip_address,
        subnet: lookup(ENV_SUBNET).unwrap_or_default(),
        gateway: lookup(ENV_GATEWAY).unwrap_or_default(),
        dns_servers,
    })
}

/// Load `.env` (if present) and read the configuration from the environment.
pub fn config_from_env() -> Result<Configuration, SettingsError> {
    match dotenv::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(_) => log::trace!("no .env file"),
    }
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Read a configuration from a JSON file.
pub fn config_from_file(path: &Path) -> Result<Configuration, SettingsError> {
    let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Reading configuration from file: {}", path.display());
    let config = serde_json::from_str(&json)?;
    Ok(config)
}
