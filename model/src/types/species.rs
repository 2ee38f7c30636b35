//! Species record

use super::detail::ResourceRef;

/// Snapshot of `/pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,

    /// Female chance in eighths (0-8), or -1 when genderless
    pub gender_rate: i8,

    /// Egg cycles needed to hatch
    pub hatch_counter: Option<u32>,

    pub egg_groups: Vec<ResourceRef>,
    pub genera: Vec<Genus>,
}

impl PokemonSpecies {
    pub fn is_genderless(&self) -> bool {
        self.gender_rate == -1
    }

    /// Genus in the given language code (e.g. "en")
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genus {
    pub genus: String,
    pub language: ResourceRef,
}
