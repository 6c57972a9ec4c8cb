//! Local wall time looked up by public IP.

use chrono::DateTime;
use picodiag_core::{GeoClock, SourceError};
use serde::Deserialize;

pub const DEFAULT_URL: &str = "http://worldtimeapi.org/api/ip";

#[derive(Debug, Deserialize)]
struct WorldTimePayload {
    datetime: String,
}

/// Clock backed by the world time API, which geolocates the caller's IP
/// and answers with the local time there.
pub struct WorldTimeApi {
    agent: ureq::Agent,
    url: String,
}

impl WorldTimeApi {
    pub fn new(agent: ureq::Agent, url: impl Into<String>) -> Self {
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl GeoClock for WorldTimeApi {
    fn now_local(&self) -> Result<String, SourceError> {
        let payload: WorldTimePayload = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|err| SourceError::Remote(err.to_string()))?
            .into_json()
            .map_err(|err| SourceError::Payload(err.to_string()))?;

        format_datetime(&payload.datetime)
    }
}

/// Reformat the API's RFC 3339 `datetime` field (local time with
/// offset) as `YYYY-MM-DD HH:MM:SS`, keeping the local wall time.
fn format_datetime(raw: &str) -> Result<String, SourceError> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|err| SourceError::Payload(format!("bad datetime '{}': {}", raw, err)))?;
    Ok(parsed.format("%Y-%m-%d %H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_reformatted_to_wall_time() {
        assert_eq!(
            format_datetime("2024-05-05T12:34:56.789012+02:00").unwrap(),
            "2024-05-05 12:34:56"
        );
    }

    #[test]
    fn test_datetime_without_fraction() {
        assert_eq!(
            format_datetime("2024-01-31T23:59:59Z").unwrap(),
            "2024-01-31 23:59:59"
        );
    }

    #[test]
    fn test_garbage_datetime_is_payload_error() {
        assert!(matches!(
            format_datetime("yesterday-ish"),
            Err(SourceError::Payload(_))
        ));
    }
}
