//! Wire-to-domain conversions
//!
//! Every function here is pure: no I/O, no shared state.

mod learn_method;
mod names;

use pokedex_wire::{
    AbilityEntry, DetailResponse, GenusEntry, MoveEntry, NamedResource, SpeciesResponse,
    SpriteSet, StatEntry, TypeEntry,
};

use crate::MappingError;
use crate::types::{
    Ability, Genus, Move, Pokemon, PokemonDetail, PokemonSpecies, ResourceRef, Sprites, Stat,
    TypeSlot,
};

pub use learn_method::{LearnMethod, resolve_learn_method};
pub use names::{capitalize_first, format_move_name};

/// Build a list entity from an index entry.
///
/// The id comes from the entry's url; the image url from `sprite_base`.
pub fn map_pokemon(item: &NamedResource, sprite_base: &str) -> Result<Pokemon, MappingError> {
    let id = item.id()?;
    if id == 0 {
        return Err(MappingError::InvalidId(item.url.clone()));
    }
    Ok(Pokemon::new(id, item.name.clone(), sprite_base))
}

pub fn map_detail(response: DetailResponse) -> PokemonDetail {
    let mut moves: Vec<Move> = response.moves.into_iter().map(map_move).collect();
    sort_moves(&mut moves);

    PokemonDetail {
        id: response.id,
        name: response.name,
        height_decimetres: response.height,
        weight_hectograms: response.weight,
        abilities: response.abilities.into_iter().map(map_ability).collect(),
        species: map_resource(response.species),
        sprites: map_sprites(response.sprites),
        types: response.types.into_iter().map(map_type).collect(),
        stats: response.stats.into_iter().map(map_stat).collect(),
        moves,
    }
}

pub fn map_species(response: SpeciesResponse) -> PokemonSpecies {
    PokemonSpecies {
        id: response.id,
        name: response.name,
        gender_rate: response.gender_rate,
        hatch_counter: response.hatch_counter,
        egg_groups: response.egg_groups.into_iter().map(map_resource).collect(),
        genera: response.genera.into_iter().map(map_genus).collect(),
    }
}

pub fn map_move(entry: MoveEntry) -> Move {
    let method = resolve_learn_method(&entry.version_group_details);
    Move {
        name: format_move_name(&entry.move_info.name),
        learn_method_description: method.description,
        level_learned_at: method.level,
    }
}

/// Order moves by level (unset last), then by name
pub fn sort_moves(moves: &mut [Move]) {
    moves.sort_by(|a, b| a.display_order(b));
}

fn map_resource(resource: NamedResource) -> ResourceRef {
    ResourceRef {
        name: resource.name,
        url: resource.url,
    }
}

fn map_ability(entry: AbilityEntry) -> Ability {
    Ability {
        name: entry.ability.name.clone(),
        resource: map_resource(entry.ability),
        is_hidden: entry.is_hidden,
        slot: entry.slot,
    }
}

fn map_sprites(sprites: SpriteSet) -> Sprites {
    Sprites {
        front_default: sprites.front_default,
        official_artwork: sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default),
    }
}

fn map_type(entry: TypeEntry) -> TypeSlot {
    TypeSlot {
        slot: entry.slot,
        name: entry.type_info.name,
    }
}

fn map_stat(entry: StatEntry) -> Stat {
    Stat {
        name: entry.stat.name,
        base_stat: entry.base_stat,
        effort: entry.effort,
    }
}

fn map_genus(entry: GenusEntry) -> Genus {
    Genus {
        genus: entry.genus,
        language: map_resource(entry.language),
    }
}
