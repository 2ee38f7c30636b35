//! Domain records handed to presentation code

mod detail;
mod moves;
mod page;
mod pokemon;
mod species;

pub use detail::{Ability, PokemonDetail, PokemonProfile, ResourceRef, Sprites, Stat, TypeSlot};
pub use moves::Move;
pub use page::Page;
pub use pokemon::{Pokemon, sprite_url};
pub use species::{Genus, PokemonSpecies};
