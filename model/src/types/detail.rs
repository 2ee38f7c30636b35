//! Full Pokemon record for the detail view

use super::moves::Move;
use super::species::PokemonSpecies;

/// Domain twin of a wire `{name, url}` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Immutable snapshot of `/pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height_decimetres: u32,
    pub weight_hectograms: u32,
    pub abilities: Vec<Ability>,
    pub species: ResourceRef,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<Stat>,

    /// Ordered by level (unset last), then name
    pub moves: Vec<Move>,
}

impl PokemonDetail {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.name.as_str()).collect()
    }

    /// Base value of a stat by API name (`hp`, `attack`, `special-defense`, ...)
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.base_stat)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub resource: ResourceRef,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprites {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
}

impl Sprites {
    /// Official artwork when available, otherwise the default front sprite
    pub fn best(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSlot {
    pub slot: u8,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    pub name: String,
    pub base_stat: u32,
    pub effort: u32,
}

/// Detail and species data merged for one Pokemon
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PokemonProfile {
    pub detail: PokemonDetail,
    pub species: PokemonSpecies,
}
