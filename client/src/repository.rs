//! Stable data interface for presentation code

use std::sync::Arc;

use pokedex_model::{PokemonDetail, PokemonProfile, PokemonSpecies, map_detail, map_species};

use crate::api::{HttpApi, PokeApi};
use crate::config::{ClientConfig, PagingConfig};
use crate::error::{ApiError, LoadFailure, Outcome};
use crate::paging::{PageCursor, PokemonPager};

/// Composes the API client, the mappers and the pager.
///
/// Holds no state between calls; each [`pokemon_stream`](Self::pokemon_stream)
/// is a fresh sequence with its own cursor.
#[derive(Clone)]
pub struct PokemonRepository {
    api: Arc<dyn PokeApi>,
    sprite_base: String,
    paging: PagingConfig,
}

impl PokemonRepository {
    pub fn new(
        api: Arc<dyn PokeApi>,
        sprite_base: impl Into<String>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            api,
            sprite_base: sprite_base.into(),
            paging,
        }
    }

    /// Wire up the HTTP client from configuration
    pub fn from_config(config: ClientConfig, paging: PagingConfig) -> Result<Self, ApiError> {
        let config = config.normalized();
        let api = HttpApi::new(&config)?;
        Ok(Self::new(Arc::new(api), config.sprite_base, paging))
    }

    /// A new incremental sequence over the Pokemon index
    pub fn pokemon_stream(&self) -> PokemonPager {
        PokemonPager::new(PageCursor::new(
            self.api.clone(),
            self.sprite_base.clone(),
            self.paging,
        ))
    }

    pub async fn pokemon_detail(&self, id: u32) -> Outcome<PokemonDetail> {
        self.api
            .fetch_detail(id)
            .await
            .map(map_detail)
            .map_err(LoadFailure::from)
    }

    pub async fn pokemon_species(&self, id: u32) -> Outcome<PokemonSpecies> {
        self.api
            .fetch_species(id)
            .await
            .map(map_species)
            .map_err(LoadFailure::from)
    }

    /// Detail and species fetched concurrently, merged once both finish.
    ///
    /// Dropping the returned future abandons both requests.
    pub async fn pokemon_profile(&self, id: u32) -> Outcome<PokemonProfile> {
        let (detail, species) = tokio::join!(self.pokemon_detail(id), self.pokemon_species(id));
        merge_profile(detail, species).inspect_err(|failure| {
            tracing::warn!(id, error = %failure, "Profile load failed");
        })
    }
}

/// Combine detail and species outcomes.
///
/// Succeeds only when both succeeded. Otherwise every failure message is kept,
/// detail first, newline-joined; a lone success is discarded.
pub fn merge_profile(
    detail: Outcome<PokemonDetail>,
    species: Outcome<PokemonSpecies>,
) -> Outcome<PokemonProfile> {
    match (detail, species) {
        (Ok(detail), Ok(species)) => Ok(PokemonProfile { detail, species }),
        (detail, species) => {
            let mut messages = Vec::with_capacity(2);
            if let Err(failure) = detail {
                messages.push(format!("Failed to load details: {}", failure));
            }
            if let Err(failure) = species {
                messages.push(format!("Failed to load species data: {}", failure));
            }
            Err(LoadFailure::new(messages.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ApiCall, FakeApi, SPRITE_BASE, detail_response, species_response};

    fn repository(api: &Arc<FakeApi>) -> PokemonRepository {
        PokemonRepository::new(api.clone(), SPRITE_BASE, PagingConfig::default())
    }

    fn not_found(path: &str) -> ApiError {
        ApiError::Http {
            status: 404,
            url: format!("https://pokeapi.co/api/v2/{}", path),
        }
    }

    #[tokio::test]
    async fn test_detail_is_mapped() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_detail(1, Ok(detail_response(1, "bulbasaur")));

        let detail = repository(&api).pokemon_detail(1).await.unwrap();
        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(detail.moves[0].name, "Growl");
        assert_eq!(detail.moves[0].learn_method_description, "Start / Evolution");
    }

    #[tokio::test]
    async fn test_failure_is_a_message() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_species(9999, Err(not_found("pokemon-species/9999")));

        let failure = repository(&api).pokemon_species(9999).await.unwrap_err();
        assert_eq!(
            failure.message(),
            "HTTP 404 from https://pokeapi.co/api/v2/pokemon-species/9999"
        );
    }

    #[tokio::test]
    async fn test_profile_success() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_detail(4, Ok(detail_response(4, "charmander")));
        api.set_species(4, Ok(species_response(4, "charmander")));

        let profile = repository(&api).pokemon_profile(4).await.unwrap();
        assert_eq!(profile.detail.id, 4);
        assert_eq!(profile.species.genus("en"), Some("Lizard Pokémon"));
    }

    #[tokio::test]
    async fn test_profile_requests_run_concurrently() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_detail(4, Ok(detail_response(4, "charmander")));
        api.set_species(4, Ok(species_response(4, "charmander")));

        repository(&api).pokemon_profile(4).await.unwrap();

        let calls = api.calls();
        let first_finish = calls
            .iter()
            .position(|c| matches!(c, ApiCall::DetailDone(_) | ApiCall::SpeciesDone(_)))
            .unwrap();
        let starts = calls[..first_finish]
            .iter()
            .filter(|c| matches!(c, ApiCall::Detail(_) | ApiCall::Species(_)))
            .count();
        assert_eq!(starts, 2, "both requests start before either finishes: {:?}", calls);
    }

    #[tokio::test]
    async fn test_profile_species_failure_discards_detail() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_detail(4, Ok(detail_response(4, "charmander")));
        api.set_species(4, Err(not_found("pokemon-species/4")));

        let failure = repository(&api).pokemon_profile(4).await.unwrap_err();
        assert_eq!(
            failure.message(),
            "Failed to load species data: HTTP 404 from https://pokeapi.co/api/v2/pokemon-species/4"
        );
    }

    #[tokio::test]
    async fn test_profile_both_fail_detail_first() {
        let api = Arc::new(FakeApi::with_total(0));
        api.set_detail(4, Err(ApiError::Network("timed out".into())));
        api.set_species(4, Err(not_found("pokemon-species/4")));

        let failure = repository(&api).pokemon_profile(4).await.unwrap_err();
        let lines: Vec<&str> = failure.message().lines().collect();
        assert_eq!(
            lines,
            vec![
                "Failed to load details: Network error: timed out",
                "Failed to load species data: HTTP 404 from https://pokeapi.co/api/v2/pokemon-species/4",
            ]
        );
    }

    #[test]
    fn test_merge_profile() {
        let detail = map_detail(detail_response(7, "squirtle"));
        let species = map_species(species_response(7, "squirtle"));

        let merged = merge_profile(Ok(detail.clone()), Ok(species.clone())).unwrap();
        assert_eq!(merged, PokemonProfile { detail, species });

        let detail = Err(LoadFailure::new("boom"));
        let failure = merge_profile(detail, Ok(merged.species)).unwrap_err();
        assert_eq!(failure.message(), "Failed to load details: boom");
    }

    #[tokio::test]
    async fn test_each_stream_is_independent() {
        let api = Arc::new(FakeApi::with_total(40));
        let repository = repository(&api);

        let first = repository.pokemon_stream();
        first.next_page().await.unwrap().unwrap();
        first.next_page().await.unwrap().unwrap();

        let second = repository.pokemon_stream();
        let page = second.next_page().await.unwrap().unwrap();
        assert_eq!(page.previous_key, None);
        assert_eq!(api.list_calls(), vec![(20, 0), (20, 20), (20, 0)]);
    }
}
