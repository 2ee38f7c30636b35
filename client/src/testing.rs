//! In-memory [`PokeApi`] for unit tests

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use pokedex_model::{Page, Pokemon};
use pokedex_wire::{
    AbilityEntry, DetailResponse, GenusEntry, ListResponse, MoveEntry, NamedResource,
    SpeciesResponse, SpriteSet, StatEntry, TypeEntry, VersionGroupDetail,
};

use crate::api::PokeApi;
use crate::error::ApiError;

pub const SPRITE_BASE: &str = "https://img.test/sprites";

/// Request log entry; `*Done` is pushed once the response is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    List { limit: u32, offset: u32 },
    Detail(u32),
    DetailDone(u32),
    Species(u32),
    SpeciesDone(u32),
}

#[derive(Default)]
struct Script {
    lists: VecDeque<Result<ListResponse, ApiError>>,
    details: HashMap<u32, Result<DetailResponse, ApiError>>,
    species: HashMap<u32, Result<SpeciesResponse, ApiError>>,
    hanging_details: HashSet<u32>,
    hang_lists: bool,
    calls: Vec<ApiCall>,
}

/// Serves a virtual index of `total` Pokemon.
///
/// Scripted list responses are consumed first, in order. Every call yields
/// once before answering so concurrent callers interleave.
pub struct FakeApi {
    total: u32,
    script: Mutex<Script>,
}

impl FakeApi {
    pub fn with_total(total: u32) -> Self {
        Self {
            total,
            script: Mutex::new(Script::default()),
        }
    }

    /// `count` entries starting after `offset`, ids `offset + 1..`
    pub fn list_response(offset: u32, count: u32, has_next: bool) -> ListResponse {
        ListResponse {
            count: offset + count,
            next: has_next.then(|| {
                format!(
                    "https://pokeapi.co/api/v2/pokemon?offset={}&limit={}",
                    offset + count,
                    count
                )
            }),
            previous: None,
            results: (offset + 1..=offset + count)
                .map(|id| NamedResource {
                    name: format!("pokemon-{}", id),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
                })
                .collect(),
        }
    }

    pub fn push_list(&self, response: Result<ListResponse, ApiError>) {
        self.script().lists.push_back(response);
    }

    pub fn set_detail(&self, id: u32, response: Result<DetailResponse, ApiError>) {
        self.script().details.insert(id, response);
    }

    pub fn set_species(&self, id: u32, response: Result<SpeciesResponse, ApiError>) {
        self.script().species.insert(id, response);
    }

    /// List requests never complete
    pub fn hang_lists(&self) {
        self.script().hang_lists = true;
    }

    /// Detail requests for `id` never complete
    pub fn hang_detail(&self, id: u32) {
        self.script().hanging_details.insert(id);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.script().calls.clone()
    }

    /// `(limit, offset)` of every list request
    pub fn list_calls(&self) -> Vec<(u32, u32)> {
        self.script()
            .calls
            .iter()
            .filter_map(|call| match call {
                ApiCall::List { limit, offset } => Some((*limit, *offset)),
                _ => None,
            })
            .collect()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    fn record(&self, call: ApiCall) {
        self.script().calls.push(call);
    }

    fn generated_list(&self, limit: u32, offset: u32) -> ListResponse {
        let count = limit.min(self.total.saturating_sub(offset));
        let mut response = Self::list_response(offset, count, offset + limit < self.total);
        response.count = self.total;
        response
    }
}

#[async_trait]
impl PokeApi for FakeApi {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListResponse, ApiError> {
        self.record(ApiCall::List { limit, offset });
        tokio::task::yield_now().await;

        let (scripted, hang) = {
            let mut script = self.script();
            (script.lists.pop_front(), script.hang_lists)
        };
        if hang {
            std::future::pending::<()>().await;
        }
        scripted.unwrap_or_else(|| Ok(self.generated_list(limit, offset)))
    }

    async fn fetch_detail(&self, id: u32) -> Result<DetailResponse, ApiError> {
        self.record(ApiCall::Detail(id));
        tokio::task::yield_now().await;

        let (scripted, hang) = {
            let script = self.script();
            (script.details.get(&id).cloned(), script.hanging_details.contains(&id))
        };
        if hang {
            std::future::pending::<()>().await;
        }
        self.record(ApiCall::DetailDone(id));
        scripted.unwrap_or_else(|| Err(not_found("pokemon", id)))
    }

    async fn fetch_species(&self, id: u32) -> Result<SpeciesResponse, ApiError> {
        self.record(ApiCall::Species(id));
        tokio::task::yield_now().await;

        let scripted = self.script().species.get(&id).cloned();
        self.record(ApiCall::SpeciesDone(id));
        scripted.unwrap_or_else(|| Err(not_found("pokemon-species", id)))
    }
}

fn not_found(path: &str, id: u32) -> ApiError {
    ApiError::Http {
        status: 404,
        url: format!("https://pokeapi.co/api/v2/{}/{}", path, id),
    }
}

fn named(name: &str, kind: &str, id: u32) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/{}/{}/", kind, id),
    }
}

fn learned(method: &str, level: u32) -> VersionGroupDetail {
    VersionGroupDetail {
        level_learned_at: level,
        move_learn_method: named(method, "move-learn-method", 1),
        version_group: Some(named("red-blue", "version-group", 1)),
    }
}

/// Detail payload with three moves: `growl` at start, `tackle` at level 1 and
/// `vine-whip` by machine
pub fn detail_response(id: u32, name: &str) -> DetailResponse {
    DetailResponse {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        abilities: vec![AbilityEntry {
            ability: named("overgrow", "ability", 65),
            is_hidden: false,
            slot: 1,
        }],
        species: named(name, "pokemon-species", id),
        sprites: SpriteSet::default(),
        types: vec![TypeEntry {
            slot: 1,
            type_info: named("grass", "type", 12),
        }],
        stats: vec![StatEntry {
            stat: named("hp", "stat", 1),
            base_stat: 45,
            effort: 0,
        }],
        moves: vec![
            MoveEntry {
                move_info: named("vine-whip", "move", 22),
                version_group_details: vec![learned("machine", 0)],
            },
            MoveEntry {
                move_info: named("tackle", "move", 33),
                version_group_details: vec![learned("level-up", 1)],
            },
            MoveEntry {
                move_info: named("growl", "move", 45),
                version_group_details: vec![learned("level-up", 0)],
            },
        ],
    }
}

pub fn species_response(id: u32, name: &str) -> SpeciesResponse {
    SpeciesResponse {
        id,
        name: name.to_string(),
        gender_rate: 1,
        hatch_counter: Some(20),
        egg_groups: vec![named("monster", "egg-group", 1)],
        genera: vec![GenusEntry {
            genus: "Lizard Pokémon".to_string(),
            language: named("en", "language", 9),
        }],
    }
}

/// Page of `count` items with ids `offset + 1..`
pub fn page(offset: u32, count: u32, previous_key: Option<u32>, next_key: Option<u32>) -> Page {
    Page {
        items: (offset + 1..=offset + count)
            .map(|id| Pokemon::new(id, format!("pokemon-{}", id), SPRITE_BASE))
            .collect(),
        previous_key,
        next_key,
    }
}
