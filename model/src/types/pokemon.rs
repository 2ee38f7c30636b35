//! Minimal list entity

/// One entry of the Pokemon index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokemon {
    /// National dex id, always positive
    pub id: u32,

    pub name: String,

    /// Artwork url built from the configured sprite base
    pub image_url: String,
}

impl Pokemon {
    pub fn new(id: u32, name: impl Into<String>, sprite_base: &str) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: sprite_url(sprite_base, id),
        }
    }
}

/// Artwork url for a Pokemon id: `{base}/{id}.png`
pub fn sprite_url(sprite_base: &str, id: u32) -> String {
    format!("{}/{}.png", sprite_base.trim_end_matches('/'), id)
}
