//! Offset cursor over `GET /pokemon`

use std::sync::Arc;

use pokedex_model::{Page, map_pokemon};
use pokedex_wire::ListResponse;
use tokio::sync::watch;

use super::state::PagingState;
use crate::api::PokeApi;
use crate::config::PagingConfig;
use crate::error::ApiError;

/// Arguments of a single [`PageCursor::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    /// Offset to load from; `None` means the configured start
    pub key: Option<u32>,

    /// Items to request
    pub load_size: u32,
}

/// Outcome of a single load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Page(Page),
    Error(ApiError),
}

impl LoadResult {
    pub fn into_result(self) -> Result<Page, ApiError> {
        match self {
            LoadResult::Page(page) => Ok(page),
            LoadResult::Error(err) => Err(err),
        }
    }
}

/// Where the cursor currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        offset: u32,
    },
    Loaded {
        offset: u32,
        items: usize,
        next_key: Option<u32>,
    },
    Error {
        offset: u32,
        error: ApiError,
    },
}

/// Loads pages by offset and derives their continuation keys.
///
/// The cursor keeps no position of its own: every [`load`](Self::load) names
/// its offset, so a failed load can be repeated with the same key. Its last
/// [`LoadState`] is published to subscribers.
pub struct PageCursor {
    api: Arc<dyn PokeApi>,
    sprite_base: String,
    config: PagingConfig,
    state: watch::Sender<LoadState>,
}

impl PageCursor {
    pub fn new(
        api: Arc<dyn PokeApi>,
        sprite_base: impl Into<String>,
        config: PagingConfig,
    ) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            api,
            sprite_base: sprite_base.into(),
            config,
            state,
        }
    }

    pub fn config(&self) -> PagingConfig {
        self.config
    }

    /// Watch the cursor's state transitions
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Fetch one page.
    ///
    /// Network and HTTP failures come back as [`LoadResult::Error`]; nothing
    /// is thrown past this call.
    pub async fn load(&self, params: LoadParams) -> LoadResult {
        let offset = params.key.unwrap_or(self.config.start_offset());
        let guard = LoadingGuard::enter(&self.state, offset);

        let result = match self.api.fetch_list(params.load_size, offset).await {
            Ok(response) => self.build_page(response, offset, params.load_size),
            Err(err) => Err(err),
        };
        guard.complete();

        match result {
            Ok(page) => {
                tracing::debug!(
                    offset,
                    items = page.len(),
                    next_key = ?page.next_key,
                    "Loaded page"
                );
                self.state.send_replace(LoadState::Loaded {
                    offset,
                    items: page.len(),
                    next_key: page.next_key,
                });
                LoadResult::Page(page)
            }
            Err(error) => {
                tracing::warn!(offset, error = %error, "Page load failed");
                self.state.send_replace(LoadState::Error {
                    offset,
                    error: error.clone(),
                });
                LoadResult::Error(error)
            }
        }
    }

    /// Offset to resume from so the anchored item stays in view.
    ///
    /// Uses the page closest to the anchor: its previous key plus one page,
    /// else its next key minus one page. `None` restarts from the start.
    ///
    /// This lands on the anchored page only when pages sit on the page grid
    /// (see [`align_key`](Self::align_key)); [`PokemonPager`](super::PokemonPager)
    /// only ever loads such pages.
    pub fn refresh_key(&self, state: &PagingState) -> Option<u32> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        let page_size = self.config.page_size();

        page.previous_key
            .map(|key| key.saturating_add(page_size))
            .or_else(|| page.next_key.map(|key| key.saturating_sub(page_size)))
    }

    /// Snap `key` down to `start_offset + n * page_size`
    pub fn align_key(&self, key: u32) -> u32 {
        let start = self.config.start_offset();
        let page_size = self.config.page_size();
        start + key.saturating_sub(start) / page_size * page_size
    }

    fn build_page(
        &self,
        response: ListResponse,
        offset: u32,
        load_size: u32,
    ) -> Result<Page, ApiError> {
        let has_next = response.has_next();
        let items = response
            .results
            .iter()
            .take(load_size as usize)
            .map(|item| map_pokemon(item, &self.sprite_base))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            previous_key: previous_key(self.config.start_offset(), offset, load_size),
            next_key: next_key(has_next, offset, load_size),
        })
    }
}

/// `None` at the start offset, otherwise one page back, never before the start
pub fn previous_key(start_offset: u32, offset: u32, load_size: u32) -> Option<u32> {
    if offset == start_offset {
        None
    } else {
        Some(offset.saturating_sub(load_size).max(start_offset))
    }
}

/// `None` when the API reports no further page, otherwise one page on
pub fn next_key(has_next: bool, offset: u32, load_size: u32) -> Option<u32> {
    has_next.then(|| offset.saturating_add(load_size))
}

/// Publishes `Loading` and restores the previous state if the load is
/// dropped before it finishes.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<LoadState>,
    previous: Option<LoadState>,
}

impl<'a> LoadingGuard<'a> {
    fn enter(state: &'a watch::Sender<LoadState>, offset: u32) -> Self {
        let previous = state.send_replace(LoadState::Loading { offset });
        Self {
            state,
            previous: Some(previous),
        }
    }

    fn complete(mut self) {
        self.previous = None;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.state.send_replace(previous);
        }
    }
}
