//! Diagnostics aggregation and rendering.
//!
//! `DiagnosticsReport::gather` polls every source once, in page order,
//! and captures each outcome independently. `render` then emits the
//! fixed-order text block the root page embeds. A failing source
//! degrades to an `unavailable: ...` line for its own section only; the
//! rest of the page still renders.

use crate::error::SourceError;
use crate::sources::DiagnosticSources;

/// Outcome of polling every diagnostic source once.
///
/// Field order matches page order: wifi, temperature, heap, UTC time,
/// IP-based time, astronauts, joke.
pub struct DiagnosticsReport {
    pub wifi: Result<String, SourceError>,
    pub temperature_celsius: Result<f32, SourceError>,
    pub heap: Result<(usize, usize), SourceError>,
    pub utc_time: Result<String, SourceError>,
    pub ip_time: Result<String, SourceError>,
    pub astronauts: Result<Vec<String>, SourceError>,
    pub joke: Result<String, SourceError>,
}

impl DiagnosticsReport {
    /// Poll every source once, in page order.
    pub fn gather(sources: &DiagnosticSources) -> Self {
        Self {
            wifi: sources.network.link().map(|link| link.to_string()),
            temperature_celsius: sources.temperature.read_celsius(),
            heap: sources
                .memory
                .snapshot()
                .map(|heap| (heap.allocated_bytes, heap.free_bytes)),
            utc_time: sources.utc_clock.now_utc(),
            ip_time: sources.geo_clock.now_local(),
            astronauts: sources.roster.people_in_space(),
            joke: sources.jokes.fetch_joke(),
        }
    }

    /// Render the multi-line status block.
    pub fn render(&self) -> String {
        let mut out = String::new();

        section(&mut out, "wifi status", &self.wifi.as_ref().cloned());
        section(
            &mut out,
            "temperature",
            &self
                .temperature_celsius
                .as_ref()
                .map(|celsius| format!("{:.1} °C", celsius)),
        );
        section(
            &mut out,
            "heap",
            &self
                .heap
                .as_ref()
                .map(|(allocated, free)| format!("allocated: {} B\nfree mem: {} B", allocated, free)),
        );
        section(&mut out, "current time at utc", &self.utc_time.as_ref().cloned());
        section(
            &mut out,
            "current time based on ip",
            &self.ip_time.as_ref().cloned(),
        );
        section(
            &mut out,
            "astronauts in space right now",
            &self.astronauts.as_ref().map(|names| names.join("\n")),
        );
        section(
            &mut out,
            "random programming joke",
            &self.joke.as_ref().cloned(),
        );

        out
    }
}

fn section(out: &mut String, title: &str, value: &Result<String, &SourceError>) {
    out.push_str(title);
    out.push_str(":\n");
    match value {
        Ok(text) => out.push_str(text),
        Err(err) => {
            out.push_str("unavailable: ");
            out.push_str(&err.to_string());
        }
    }
    out.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{
        GeoClock, HeapSnapshot, JokeSource, LinkReport, MemoryStats, NetworkLink, SpaceRoster,
        TemperatureSensor, UtcClock,
    };
    use pretty_assertions::assert_eq;

    struct FixedLink;
    impl NetworkLink for FixedLink {
        fn link(&self) -> Result<LinkReport, SourceError> {
            Ok(LinkReport {
                ip: "10.0.0.9".to_string(),
                rssi_dbm: -61,
            })
        }
    }

    struct FixedTemperature;
    impl TemperatureSensor for FixedTemperature {
        fn read_celsius(&self) -> Result<f32, SourceError> {
            Ok(21.43)
        }
    }

    struct FixedMemory;
    impl MemoryStats for FixedMemory {
        fn snapshot(&self) -> Result<HeapSnapshot, SourceError> {
            Ok(HeapSnapshot {
                allocated_bytes: 12000,
                free_bytes: 53536,
            })
        }
    }

    struct FixedUtc;
    impl UtcClock for FixedUtc {
        fn now_utc(&self) -> Result<String, SourceError> {
            Ok("2024-03-01 12:00:00".to_string())
        }
    }

    struct FixedGeo;
    impl GeoClock for FixedGeo {
        fn now_local(&self) -> Result<String, SourceError> {
            Ok("2024-03-01 13:00:00".to_string())
        }
    }

    struct FixedJoke;
    impl JokeSource for FixedJoke {
        fn fetch_joke(&self) -> Result<String, SourceError> {
            Ok("a byte walks into a bar".to_string())
        }
    }

    struct FailingJoke;
    impl JokeSource for FailingJoke {
        fn fetch_joke(&self) -> Result<String, SourceError> {
            Err(SourceError::Remote("connection refused".to_string()))
        }
    }

    struct FixedRoster;
    impl SpaceRoster for FixedRoster {
        fn people_in_space(&self) -> Result<Vec<String>, SourceError> {
            Ok(vec!["Ada Lovelace".to_string(), "Grace Hopper".to_string()])
        }
    }

    fn fixed_sources() -> DiagnosticSources {
        DiagnosticSources {
            network: Box::new(FixedLink),
            temperature: Box::new(FixedTemperature),
            memory: Box::new(FixedMemory),
            utc_clock: Box::new(FixedUtc),
            geo_clock: Box::new(FixedGeo),
            jokes: Box::new(FixedJoke),
            roster: Box::new(FixedRoster),
        }
    }

    #[test]
    fn test_render_full_page() {
        let report = DiagnosticsReport::gather(&fixed_sources());

        assert_eq!(
            report.render(),
            "wifi status:\n\
             10.0.0.9 (-61 dBm)\n\n\
             temperature:\n\
             21.4 °C\n\n\
             heap:\n\
             allocated: 12000 B\n\
             free mem: 53536 B\n\n\
             current time at utc:\n\
             2024-03-01 12:00:00\n\n\
             current time based on ip:\n\
             2024-03-01 13:00:00\n\n\
             astronauts in space right now:\n\
             Ada Lovelace\nGrace Hopper\n\n\
             random programming joke:\n\
             a byte walks into a bar\n\n"
        );
    }

    #[test]
    fn test_render_order_is_fixed() {
        let rendered = DiagnosticsReport::gather(&fixed_sources()).render();

        let values = [
            "10.0.0.9 (-61 dBm)",
            "21.4 °C",
            "allocated: 12000 B",
            "2024-03-01 12:00:00",
            "2024-03-01 13:00:00",
            "Ada Lovelace",
            "a byte walks into a bar",
        ];

        let mut last = 0;
        for value in values {
            let at = rendered[last..]
                .find(value)
                .unwrap_or_else(|| panic!("'{}' missing or out of order", value));
            let at = last + at;
            // Each value appears exactly once.
            assert!(rendered[at + value.len()..].find(value).is_none());
            last = at + value.len();
        }
    }

    #[test]
    fn test_failing_source_degrades_only_its_section() {
        let mut sources = fixed_sources();
        sources.jokes = Box::new(FailingJoke);

        let rendered = DiagnosticsReport::gather(&sources).render();

        assert!(rendered.contains(
            "random programming joke:\nunavailable: remote request failed: connection refused"
        ));
        // Every other section still renders its value.
        assert!(rendered.contains("10.0.0.9 (-61 dBm)"));
        assert!(rendered.contains("21.4 °C"));
        assert!(rendered.contains("Ada Lovelace"));
    }
}
