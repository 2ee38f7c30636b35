//! Incremental page sequence over a [`PageCursor`]

use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::Stream;
use pokedex_model::Page;
use tokio::sync::{Mutex, watch};

use super::cursor::{LoadParams, LoadResult, LoadState, PageCursor};
use super::state::PagingState;
use crate::error::ApiError;

/// Forward position of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Forward {
    /// Nothing loaded yet; first load goes to this key (`None` = start)
    Initial(Option<u32>),
    At(u32),
    End,
}

#[derive(Debug)]
struct Window {
    pages: Vec<Page>,
    forward: Forward,

    /// Offset of the first loaded page
    first_offset: Option<u32>,

    /// Where the page before the window starts, if any
    backward: Option<u32>,

    last_append: Option<LoadResult>,
    last_prepend: Option<LoadResult>,
}

impl Window {
    fn starting_at(key: Option<u32>) -> Self {
        Self {
            pages: Vec::new(),
            forward: Forward::Initial(key),
            first_offset: None,
            backward: None,
            last_append: None,
            last_prepend: None,
        }
    }
}

/// Lazy, restartable sequence of [`Page`]s.
///
/// Pages are loaded on demand and kept in memory, so scrolling back over them
/// never goes to the network. Only one load runs at a time; a caller that asks
/// for a page while the same kind of load is already running gets that load's
/// outcome instead of starting another.
///
/// A failed load leaves the position untouched: asking again retries the same
/// offset.
pub struct PokemonPager {
    cursor: PageCursor,
    window: Mutex<Window>,
    appends: AtomicU64,
    prepends: AtomicU64,
}

impl PokemonPager {
    pub fn new(cursor: PageCursor) -> Self {
        Self::starting_at(cursor, None)
    }

    /// Start the sequence at the page holding `key` instead of the configured
    /// start offset.
    ///
    /// `key` is snapped down onto the page grid, so later refreshes and
    /// backward loads line up with the first page.
    pub fn starting_at(cursor: PageCursor, key: Option<u32>) -> Self {
        let key = key.map(|key| cursor.align_key(key));
        Self {
            cursor,
            window: Mutex::new(Window::starting_at(key)),
            appends: AtomicU64::new(0),
            prepends: AtomicU64::new(0),
        }
    }

    /// Watch the underlying cursor's load state
    pub fn load_state(&self) -> watch::Receiver<LoadState> {
        self.cursor.subscribe()
    }

    /// Load the page after the window.
    ///
    /// Returns `None` once the last page has been delivered.
    pub async fn next_page(&self) -> Option<Result<Page, ApiError>> {
        let seen = self.appends.load(Ordering::Acquire);
        let mut window = self.window.lock().await;
        if self.appends.load(Ordering::Acquire) != seen {
            return window.last_append.clone().map(LoadResult::into_result);
        }
        self.append(&mut window).await
    }

    /// Load the page before the window.
    ///
    /// Returns `None` when the window already starts at the first page or
    /// nothing has been loaded yet.
    pub async fn previous_page(&self) -> Option<Result<Page, ApiError>> {
        let seen = self.prepends.load(Ordering::Acquire);
        let mut window = self.window.lock().await;
        if self.prepends.load(Ordering::Acquire) != seen {
            return window.last_prepend.clone().map(LoadResult::into_result);
        }

        let key = window.backward?;
        let first_offset = window.first_offset?;
        let load_size = first_offset
            .saturating_sub(key)
            .clamp(1, self.cursor.config().page_size());

        let result = self
            .cursor
            .load(LoadParams {
                key: Some(key),
                load_size,
            })
            .await;

        if let LoadResult::Page(page) = &result {
            window.backward = page.previous_key;
            window.first_offset = Some(key);
            window.pages.insert(0, page.clone());
        }
        window.last_prepend = Some(result.clone());
        self.prepends.fetch_add(1, Ordering::Release);
        Some(result.into_result())
    }

    /// Drop the window and resume near `anchor_position`.
    ///
    /// The resume offset comes from [`PageCursor::refresh_key`] over the pages
    /// held so far; without an anchor the sequence restarts from the start.
    /// Returns the first page of the new window.
    pub async fn refresh(&self, anchor_position: Option<usize>) -> Option<Result<Page, ApiError>> {
        let mut window = self.window.lock().await;
        let state = PagingState::new(std::mem::take(&mut window.pages), anchor_position);
        let key = self
            .cursor
            .refresh_key(&state)
            .map(|key| self.cursor.align_key(key));
        tracing::debug!(anchor = ?anchor_position, key = ?key, "Refreshing pages");

        *window = Window::starting_at(key);
        self.append(&mut window).await
    }

    /// Pages currently held, in list order
    pub async fn pages(&self) -> Vec<Page> {
        self.window.lock().await.pages.clone()
    }

    /// Snapshot for [`PageCursor::refresh_key`]
    pub async fn paging_state(&self, anchor_position: Option<usize>) -> PagingState {
        PagingState::new(self.pages().await, anchor_position)
    }

    pub async fn is_exhausted(&self) -> bool {
        self.window.lock().await.forward == Forward::End
    }

    /// Forward traversal as a [`Stream`].
    ///
    /// An error item does not end the stream; polling again retries the
    /// same offset. The stream ends after the last page.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page, ApiError>> {
        futures_util::stream::unfold(self, |pager| async move {
            let item = pager.next_page().await?;
            Some((item, pager))
        })
    }

    async fn append(&self, window: &mut Window) -> Option<Result<Page, ApiError>> {
        let (key, initial) = match window.forward {
            Forward::Initial(key) => (key, true),
            Forward::At(key) => (Some(key), false),
            Forward::End => return None,
        };

        let result = self
            .cursor
            .load(LoadParams {
                key,
                load_size: self.cursor.config().page_size(),
            })
            .await;

        if let LoadResult::Page(page) = &result {
            if initial {
                window.first_offset = Some(key.unwrap_or(self.cursor.config().start_offset()));
                window.backward = page.previous_key;
            }
            window.forward = match page.next_key {
                Some(next) => Forward::At(next),
                None => Forward::End,
            };
            window.pages.push(page.clone());
        }
        window.last_append = Some(result.clone());
        self.appends.fetch_add(1, Ordering::Release);
        Some(result.into_result())
    }
}
