//! Network link reporting and the association error taxonomy.

use std::net::{IpAddr, UdpSocket};

use picodiag_core::{LinkReport, NetworkLink, SourceError};
use thiserror::Error;

/// Failures while bringing up or inspecting the network link.
///
/// The wifi variants mirror the association status codes a wireless
/// firmware distinguishes (wrong credentials, network not found,
/// generic association failure); on-device ports of [`NetworkLink`]
/// raise them from their connect path. A host build can only fail to
/// determine its local address. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("cannot connect to '{ssid}' because of authentication problem")]
    WrongPassword { ssid: String },

    #[error("cannot connect to '{ssid}' because the network is not found")]
    NoApFound { ssid: String },

    #[error("cannot connect to '{ssid}', association failed with status {status}")]
    ConnectFailed { ssid: String, status: i32 },

    #[error("cannot determine local address: {0}")]
    NoLocalAddress(#[source] std::io::Error),
}

/// The host's already-connected interface.
///
/// Hosts have no radio, so the signal strength is whatever the
/// configuration says; firmware ports read the real figure.
pub struct HostLink {
    ip: IpAddr,
    rssi_dbm: i32,
}

impl HostLink {
    /// Detect the outbound local address by connecting a UDP socket
    /// toward a public address (no packet is sent) and reading the
    /// local half of the pair.
    pub fn detect(rssi_dbm: i32) -> Result<Self, LinkError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0)).map_err(LinkError::NoLocalAddress)?;
        socket
            .connect(("8.8.8.8", 53))
            .map_err(LinkError::NoLocalAddress)?;
        let ip = socket
            .local_addr()
            .map_err(LinkError::NoLocalAddress)?
            .ip();
        Ok(Self { ip, rssi_dbm })
    }

    /// A link with a known address, e.g. from configuration.
    pub fn fixed(ip: IpAddr, rssi_dbm: i32) -> Self {
        Self { ip, rssi_dbm }
    }
}

impl NetworkLink for HostLink {
    fn link(&self) -> Result<LinkReport, SourceError> {
        Ok(LinkReport {
            ip: self.ip.to_string(),
            rssi_dbm: self.rssi_dbm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_link_reports_address_and_rssi() {
        let link = HostLink::fixed("192.168.0.31".parse().unwrap(), -67);
        let report = link.link().unwrap();
        assert_eq!(report.to_string(), "192.168.0.31 (-67 dBm)");
    }

    #[test]
    fn test_association_errors_name_the_network() {
        let err = LinkError::NoApFound {
            ssid: "shed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot connect to 'shed' because the network is not found"
        );

        let err = LinkError::ConnectFailed {
            ssid: "shed".to_string(),
            status: -2,
        };
        assert!(err.to_string().contains("status -2"));
    }
}
