//! `GET /pokemon/{id}`
//!
//! Only the fields consumed downstream are declared; everything else in the
//! (very large) payload is skipped by serde.

use serde::Deserialize;

use crate::resource::NamedResource;

/// Full Pokemon record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,

    pub species: NamedResource,

    #[serde(default)]
    pub sprites: SpriteSet,

    #[serde(default)]
    pub types: Vec<TypeEntry>,

    #[serde(default)]
    pub stats: Vec<StatEntry>,

    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityEntry {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArtworkSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeEntry {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    pub stat: NamedResource,
    pub base_stat: u32,
    pub effort: u32,
}

/// A move the Pokemon can learn, with one record per version group
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_info: NamedResource,

    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// How a move is learned in one version group
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionGroupDetail {
    /// 0 for moves known at start or learned on evolution
    pub level_learned_at: u32,

    pub move_learn_method: NamedResource,

    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

impl VersionGroupDetail {
    /// Name of the learn method, e.g. `level-up` or `machine`
    pub fn method(&self) -> &str {
        &self.move_learn_method.name
    }
}
