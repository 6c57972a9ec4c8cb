//! # picodiag-providers
//!
//! Host-side implementations of the `picodiag-core` collaborator
//! traits: the three remote JSON feeds, an SNTP clock, heap accounting,
//! a thermal-zone temperature sensor, the network link report, and the
//! boot counter.
//!
//! Every outbound call carries its own timeout; a slow or dead remote
//! degrades one diagnostics field, never the whole server. A firmware
//! port replaces this crate with on-device implementations of the same
//! traits.

pub mod bootcount;
pub mod heap;
pub mod jokes;
pub mod led;
pub mod network;
pub mod ntp;
pub mod space;
pub mod temperature;
pub mod worldtime;

pub use bootcount::BootCounter;
pub use heap::{CountingAllocator, HeapMonitor};
pub use jokes::JokeApi;
pub use led::StatusLed;
pub use network::{HostLink, LinkError};
pub use ntp::SntpClock;
pub use space::AstrosApi;
pub use temperature::{rp2040_raw_to_celsius, ThermalZone};
pub use worldtime::WorldTimeApi;

use std::time::Duration;

/// One shared blocking HTTP agent for all remote fetches.
///
/// The timeout bounds the whole call (connect, send, read); the server
/// is single-threaded, so an unbounded fetch would stall every client.
pub fn http_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(concat!("picodiag/", env!("CARGO_PKG_VERSION")))
        .build()
}
