//! Roster of people currently in space.

use picodiag_core::{SourceError, SpaceRoster};
use serde::Deserialize;

pub const DEFAULT_URL: &str = "http://api.open-notify.org/astros.json";

#[derive(Debug, Deserialize)]
struct AstrosPayload {
    number: u32,
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
    craft: Option<String>,
}

/// Roster source backed by the open-notify astronaut API.
pub struct AstrosApi {
    agent: ureq::Agent,
    url: String,
}

impl AstrosApi {
    pub fn new(agent: ureq::Agent, url: impl Into<String>) -> Self {
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl SpaceRoster for AstrosApi {
    fn people_in_space(&self) -> Result<Vec<String>, SourceError> {
        let payload: AstrosPayload = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|err| SourceError::Remote(err.to_string()))?
            .into_json()
            .map_err(|err| SourceError::Payload(err.to_string()))?;

        Ok(payload.people.into_iter().map(|person| person.name).collect())
    }
}
