//! Binary configuration.
//!
//! All fields have working defaults; a TOML file given as the first
//! command-line argument overrides them.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Listen address for the web server.
    pub bind: SocketAddr,

    /// Overall timeout for each remote fetch and the SNTP exchange.
    pub fetch_timeout_ms: u64,

    pub joke_url: String,
    pub astros_url: String,
    pub worldtime_url: String,
    pub ntp_server: String,

    /// Nominal heap budget the free-memory figure is reported against.
    pub heap_capacity_bytes: usize,

    /// Sysfs thermal zone file to read the temperature from.
    pub thermal_zone: PathBuf,

    /// Signal strength to report; hosts have no radio to ask.
    pub rssi_dbm: i32,

    pub boot_count_path: PathBuf,

    /// Wait for a line on stdin before starting, like the board build
    /// waiting for a keypress.
    pub wait_for_operator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:80".parse().unwrap(),
            fetch_timeout_ms: 5_000,
            joke_url: picodiag_providers::jokes::DEFAULT_URL.to_string(),
            astros_url: picodiag_providers::space::DEFAULT_URL.to_string(),
            worldtime_url: picodiag_providers::worldtime::DEFAULT_URL.to_string(),
            ntp_server: picodiag_providers::ntp::DEFAULT_SERVER.to_string(),
            heap_capacity_bytes: 64 * 1024 * 1024,
            thermal_zone: picodiag_providers::temperature::DEFAULT_ZONE.into(),
            rssi_dbm: 0,
            boot_count_path: "picodiag-boot-count".into(),
            wait_for_operator: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}
