//! Temperature sources.

use std::path::PathBuf;

use picodiag_core::{SourceError, TemperatureSensor};

/// Default sysfs zone on most Linux hosts.
pub const DEFAULT_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Temperature from a sysfs thermal zone file (millidegrees Celsius).
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemperatureSensor for ThermalZone {
    fn read_celsius(&self) -> Result<f32, SourceError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let millidegrees: i32 = raw.trim().parse().map_err(|_| {
            SourceError::Payload(format!("thermal zone reading '{}' is not a number", raw.trim()))
        })?;
        Ok(millidegrees as f32 / 1000.0)
    }
}

/// Convert a raw 16-bit reading of the RP2040's internal sensor to
/// degrees Celsius, rounded to one decimal.
///
/// 3.3 V reference over 16-bit resolution; datasheet calibration:
/// 27 °C at 0.706 V, -1.721 mV per degree. Firmware ports feed this
/// from the ADC; hosts use [`ThermalZone`] instead.
pub fn rp2040_raw_to_celsius(raw: u16) -> f32 {
    const TO_VOLTS: f32 = 3.3 / 65535.0;
    let volts = raw as f32 * TO_VOLTS;
    let celsius = 27.0 - (volts - 0.706) / 0.001721;
    (celsius * 10.0).round() / 10.0
}
