//! Host stand-in for the onboard LED.

use picodiag_core::{Led, SourceError};
use tracing::info;

/// Process-local LED state with a log line per change.
///
/// Firmware ports drive the actual pin behind the same trait.
pub struct StatusLed {
    on: bool,
}

impl StatusLed {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}

impl Led for StatusLed {
    fn set(&mut self, on: bool) -> Result<(), SourceError> {
        if self.on != on {
            info!("led {}", if on { "on" } else { "off" });
        }
        self.on = on;
        Ok(())
    }
}
