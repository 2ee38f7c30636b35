//! Named resource references and id extraction

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A `{name, url}` pointer to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id of the referenced resource, taken from its url
    pub fn id(&self) -> Result<u32, ParseError> {
        parse_resource_id(&self.url)
    }
}

/// Parse the trailing non-empty path segment of a resource url as an id.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` and `https://x/pokemon/25` both
/// yield `25`; the path depth in front of the id is irrelevant.
pub fn parse_resource_id(url: &str) -> Result<u32, ParseError> {
    let segment = url
        .split('/')
        .filter(|part| !part.is_empty())
        .next_back()
        .ok_or_else(|| ParseError::InvalidResourceId(url.to_string()))?;

    segment
        .parse()
        .map_err(|_| ParseError::InvalidResourceId(url.to_string()))
}
