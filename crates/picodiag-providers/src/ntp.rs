//! UTC time via one SNTP exchange.
//!
//! Sends a single SNTP v3 client packet over UDP and reads the transmit
//! timestamp out of the reply. Both directions carry a timeout so a
//! dead time server degrades the UTC field instead of stalling the
//! whole page.

use std::net::UdpSocket;
use std::time::Duration;

use chrono::DateTime;
use picodiag_core::{SourceError, UtcClock};

pub const DEFAULT_SERVER: &str = "pool.ntp.org:123";

const PACKET_LEN: usize = 48;
/// Seconds between the NTP epoch (1900) and the unix epoch (1970).
const UNIX_EPOCH_OFFSET: u64 = 2_208_988_800;
/// Byte offset of the transmit timestamp's seconds field in the reply.
const TRANSMIT_SECONDS_OFFSET: usize = 40;

/// UTC clock backed by an SNTP server.
pub struct SntpClock {
    server: String,
    timeout: Duration,
}

impl SntpClock {
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            timeout,
        }
    }

    fn query_unix_seconds(&self) -> Result<u64, SourceError> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        socket.set_read_timeout(Some(self.timeout))?;
        socket.set_write_timeout(Some(self.timeout))?;
        socket.connect(self.server.as_str())?;

        // LI=0, version 3, mode 3 (client); the rest of the packet is zero.
        let mut request = [0u8; PACKET_LEN];
        request[0] = 0x1b;
        socket.send(&request)?;

        let mut reply = [0u8; PACKET_LEN];
        let received = socket.recv(&mut reply)?;
        parse_reply(&reply[..received])
    }
}

impl UtcClock for SntpClock {
    fn now_utc(&self) -> Result<String, SourceError> {
        format_unix_seconds(self.query_unix_seconds()?)
    }
}

/// Extract the transmit timestamp from an SNTP reply and convert it to
/// unix seconds.
fn parse_reply(reply: &[u8]) -> Result<u64, SourceError> {
    if reply.len() < TRANSMIT_SECONDS_OFFSET + 4 {
        return Err(SourceError::Payload(format!(
            "short SNTP reply: {} bytes",
            reply.len()
        )));
    }

    let seconds = u32::from_be_bytes([
        reply[TRANSMIT_SECONDS_OFFSET],
        reply[TRANSMIT_SECONDS_OFFSET + 1],
        reply[TRANSMIT_SECONDS_OFFSET + 2],
        reply[TRANSMIT_SECONDS_OFFSET + 3],
    ]) as u64;

    seconds
        .checked_sub(UNIX_EPOCH_OFFSET)
        .ok_or_else(|| SourceError::Payload("SNTP timestamp before the unix epoch".to_string()))
}

fn format_unix_seconds(seconds: u64) -> Result<String, SourceError> {
    DateTime::from_timestamp(seconds as i64, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .ok_or_else(|| SourceError::Payload(format!("unix timestamp {} out of range", seconds)))
}
