//! Random programming joke feed.
//!
//! The joke API serves two payload shapes: `"single"` jokes carry the
//! whole text in `joke`, two-part jokes carry `setup` and `delivery`.

use picodiag_core::{JokeSource, SourceError};
use serde::Deserialize;

/// Default endpoint, programming category only.
pub const DEFAULT_URL: &str = "https://v2.jokeapi.dev/joke/Programming";

#[derive(Debug, Deserialize)]
struct JokePayload {
    #[serde(rename = "type")]
    kind: String,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
}

/// Joke source backed by the remote joke API.
pub struct JokeApi {
    agent: ureq::Agent,
    url: String,
}

impl JokeApi {
    pub fn new(agent: ureq::Agent, url: impl Into<String>) -> Self {
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl JokeSource for JokeApi {
    fn fetch_joke(&self) -> Result<String, SourceError> {
        let payload: JokePayload = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|err| SourceError::Remote(err.to_string()))?
            .into_json()
            .map_err(|err| SourceError::Payload(err.to_string()))?;

        joke_text(payload)
    }
}

fn joke_text(payload: JokePayload) -> Result<String, SourceError> {
    if payload.kind == "single" {
        payload
            .joke
            .ok_or_else(|| SourceError::Payload("single joke without 'joke' field".to_string()))
    } else {
        match (payload.setup, payload.delivery) {
            (Some(setup), Some(delivery)) => Ok(format!("{}\n{}", setup, delivery)),
            _ => Err(SourceError::Payload(
                "two-part joke missing setup or delivery".to_string(),
            )),
        }
    }
}
