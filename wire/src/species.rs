//! `GET /pokemon-species/{id}`

use serde::Deserialize;

use crate::resource::NamedResource;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,

    /// Chance of being female in eighths, or -1 for genderless
    pub gender_rate: i8,

    #[serde(default)]
    pub hatch_counter: Option<u32>,

    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,

    #[serde(default)]
    pub genera: Vec<GenusEntry>,
}

/// Localised category name, e.g. "Seed Pokémon"
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}
