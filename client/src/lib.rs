//! Async PokeAPI client for list and detail screens.
//!
//! # Layers
//!
//! ```text
//! HttpApi (reqwest)  ──►  PageCursor ──► PokemonPager ──► Stream<Page>
//!        │
//!        └──────────────► PokemonRepository ──► DetailLoader (watch)
//! ```
//!
//! Everything above [`HttpApi`] depends on the [`PokeApi`] trait, so tests
//! and alternative transports can be swapped in.
//!
//! # Example
//!
//! ```ignore
//! use pokedex_client::{ClientConfig, PagingConfig, PokemonRepository};
//!
//! let config = ClientConfig::from_env();
//! let repository = PokemonRepository::from_config(config, PagingConfig::default())?;
//!
//! let pager = repository.pokemon_stream();
//! while let Some(page) = pager.next_page().await {
//!     let page = page?;
//!     for pokemon in &page.items {
//!         println!("#{:<4} {}", pokemon.id, pokemon.name);
//!     }
//! }
//!
//! let profile = repository.pokemon_profile(25).await?;
//! println!("{} has {} moves", profile.detail.name, profile.detail.moves.len());
//! ```

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod paging;
pub mod repository;

#[cfg(test)]
mod testing;

pub use api::{HttpApi, PokeApi};
pub use config::{ClientConfig, PagingConfig};
pub use detail::{DetailLoader, DetailState};
pub use error::{ApiError, LoadFailure, Outcome};
pub use paging::{LoadParams, LoadResult, LoadState, PageCursor, PagingState, PokemonPager};
pub use repository::{PokemonRepository, merge_profile};

pub use pokedex_model::{Move, Page, Pokemon, PokemonDetail, PokemonProfile, PokemonSpecies};
