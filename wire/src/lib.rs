//! Wire records for the PokeAPI REST endpoints.
//!
//! These types mirror the JSON returned by `/pokemon`, `/pokemon/{id}` and
//! `/pokemon-species/{id}` one to one. They are deliberately kept apart from
//! the domain records in `pokedex-model` so that API shape changes stop here.
//!
//! ```text
//! pokedex-wire (wire format)   ← THIS CRATE
//!        │
//!        ▼
//! pokedex-model (domain records + mapping)
//!        │
//!        ▼
//! pokedex-client (HTTP, paging, repository)
//! ```

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod detail;
pub mod list;
pub mod resource;
pub mod species;

pub use detail::{
    AbilityEntry, ArtworkSprite, DetailResponse, MoveEntry, OtherSprites, SpriteSet, StatEntry,
    TypeEntry, VersionGroupDetail,
};
pub use list::ListResponse;
pub use resource::{NamedResource, parse_resource_id};
pub use species::{GenusEntry, SpeciesResponse};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("No numeric id in resource url: {0}")]
    InvalidResourceId(String),

    #[error("Malformed JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err.to_string())
    }
}

/// Decode a response body into one of the wire records
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ParseError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::InvalidFormat("empty response body".to_string()));
    }
    Ok(serde_json::from_slice(body)?)
}
