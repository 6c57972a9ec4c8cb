//! Collaborator traits for the diagnostics page.
//!
//! Each trait is one narrow interface over something the board (or host)
//! can report: the network link, the temperature sensor, heap usage, two
//! independently-sourced clocks, two remote data feeds, and the LED.
//! Implementations live in `picodiag-providers` (host) or in a firmware
//! port; tests substitute fixed-value mocks.

use crate::error::SourceError;

/// Address and signal strength of the connected network link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    /// Local address on the connected interface.
    pub ip: String,
    /// Received signal strength in dBm. Host builds report a configured
    /// figure; firmware ports read the radio.
    pub rssi_dbm: i32,
}

impl std::fmt::Display for LinkReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} dBm)", self.ip, self.rssi_dbm)
    }
}

/// Heap usage snapshot in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapSnapshot {
    pub allocated_bytes: usize,
    pub free_bytes: usize,
}

/// The connected network interface.
pub trait NetworkLink: Send {
    /// Current address and signal strength.
    fn link(&self) -> Result<LinkReport, SourceError>;
}

/// The onboard temperature sensor.
pub trait TemperatureSensor: Send {
    /// Temperature in degrees Celsius.
    fn read_celsius(&self) -> Result<f32, SourceError>;
}

/// Heap allocation statistics.
pub trait MemoryStats: Send {
    fn snapshot(&self) -> Result<HeapSnapshot, SourceError>;
}

/// UTC wall time from a network time sync.
pub trait UtcClock: Send {
    /// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
    fn now_utc(&self) -> Result<String, SourceError>;
}

/// Local wall time derived from the caller's public IP.
pub trait GeoClock: Send {
    /// Current local time as `YYYY-MM-DD HH:MM:SS`.
    fn now_local(&self) -> Result<String, SourceError>;
}

/// A remote joke feed.
pub trait JokeSource: Send {
    /// One joke; two-part jokes are joined with a newline.
    fn fetch_joke(&self) -> Result<String, SourceError>;
}

/// The roster of people currently in space.
pub trait SpaceRoster: Send {
    /// Names in payload order.
    fn people_in_space(&self) -> Result<Vec<String>, SourceError>;
}

/// The onboard LED output.
///
/// State is fully determined by each call; implementations must not
/// accumulate anything across calls.
pub trait Led: Send {
    fn set(&mut self, on: bool) -> Result<(), SourceError>;
}

/// Everything the diagnostics page reads, injected once at startup.
///
/// Replaces the ambient module-level handles of the original firmware
/// with explicit state owned by the server context.
pub struct DiagnosticSources {
    pub network: Box<dyn NetworkLink>,
    pub temperature: Box<dyn TemperatureSensor>,
    pub memory: Box<dyn MemoryStats>,
    pub utc_clock: Box<dyn UtcClock>,
    pub geo_clock: Box<dyn GeoClock>,
    pub jokes: Box<dyn JokeSource>,
    pub roster: Box<dyn SpaceRoster>,
}
