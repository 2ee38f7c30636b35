//! Domain records and wire-to-domain mapping for the Pokedex data layer.
//!
//! # Overview
//!
//! `pokedex-model` sits between `pokedex-wire` (API shape) and the client:
//!
//! ```text
//! pokedex-wire (wire format)
//!        │
//!        ▼
//! pokedex-model (domain records + mapping) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-client (HTTP, paging, repository)
//! ```
//!
//! # Main Types
//!
//! - [`Pokemon`] - Minimal list entry with a derived artwork url
//! - [`PokemonDetail`] - Full record for a detail view, moves already ordered
//! - [`PokemonSpecies`] - Species data (gender rate, egg groups, genera)
//! - [`Move`] - A learnable move with its resolved learn method
//! - [`Page`] - One bounded batch of [`Pokemon`] plus continuation keys
//!
//! # Mapping
//!
//! All conversions live in [`mapping`] and are pure functions. The move
//! learn-method rules are in [`resolve_learn_method`].
//!
//! ```ignore
//! use pokedex_model::mapping::map_detail;
//!
//! let detail = map_detail(response);
//! for mv in &detail.moves {
//!     println!("{:<20} {}", mv.name, mv.learn_method_description);
//! }
//! ```

use thiserror::Error;

pub mod mapping;
pub mod types;

pub use mapping::{
    LearnMethod, format_move_name, map_detail, map_move, map_pokemon, map_species,
    resolve_learn_method, sort_moves,
};
pub use types::{
    Ability, Genus, Move, Page, Pokemon, PokemonDetail, PokemonProfile, PokemonSpecies,
    ResourceRef, Sprites, Stat, TypeSlot, sprite_url,
};

pub use pokedex_wire::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Resource id must be positive: {0}")]
    InvalidId(String),
}
