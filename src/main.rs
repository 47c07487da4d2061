use clap::Parser;
use ipconf_check::error::SettingsError;
use ipconf_check::models::{ConfigType, Configuration, DnsServers};
use ipconf_check::output::{copy_summary, print_report, report_json, FileClipboard};
use ipconf_check::{check_configuration, settings};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Validate a static IP configuration and print a summary.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// IP address, e.g. 192.168.1.10 or 2001:db8::1
    #[arg(long)]
    address: Option<String>,
    /// Subnet as prefix length (24, 64) or IPv4 dotted mask (255.255.255.0)
    #[arg(long)]
    subnet: Option<String>,
    /// Default gateway address
    #[arg(long)]
    gateway: Option<String>,
    /// DNS server, repeat up to three times
    #[arg(long = "dns")]
    dns: Vec<String>,
    /// Select DHCP instead of a static configuration
    #[arg(long)]
    dhcp: bool,
    /// Read the configuration from a JSON file instead of IPCONF_* variables
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print findings as JSON
    #[arg(long)]
    json: bool,
    /// Print the configuration summary when it is valid
    #[arg(long)]
    summary: bool,
    /// Copy the summary into this file when it is valid
    #[arg(long)]
    copy_to: Option<PathBuf>,
    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    log_config: PathBuf,
}

fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(log_config, Default::default()).is_ok() {
        return Ok(());
    }
    // No config file, warnings and errors to stderr
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("log config {} not found, using defaults", log_config.display());
    Ok(())
}

/// Command line values win over the file or environment.
fn apply_overrides(config: &mut Configuration, cli: &Cli) -> Result<(), SettingsError> {
    if let Some(address) = &cli.address {
        config.ip_address = address.clone();
        config.config_type = ConfigType::Static;
    }
    if let Some(subnet) = &cli.subnet {
        config.subnet = subnet.clone();
    }
    if let Some(gateway) = &cli.gateway {
        config.gateway = gateway.clone();
    }
    if !cli.dns.is_empty() {
        config.dns_servers = DnsServers::from_entries(cli.dns.iter().cloned())
            .ok_or(SettingsError::TooManyDns(cli.dns.len()))?;
    }
    if cli.dhcp {
        config.config_type = ConfigType::Dhcp;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    init_logging(&cli.log_config)?;
    log::info!("#Start main()");

    let mut config = match &cli.config {
        Some(path) => settings::config_from_file(path)?,
        None => settings::config_from_env()?,
    };
    apply_overrides(&mut config, &cli)?;

    let (report, summary) = check_configuration(&config);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else {
        print_report(&report);
    }

    if let Some(text) = &summary {
        if cli.summary {
            println!("{text}");
        }
        if let Some(path) = &cli.copy_to {
            let status = copy_summary(&mut FileClipboard::new(path), text);
            println!("{}", status.message());
        }
    } else if cli.summary || cli.copy_to.is_some() {
        log::warn!("No summary: the configuration is not complete and valid");
    }

    if report.has_blocking() {
        std::process::exit(1);
    }
    Ok(())
}
