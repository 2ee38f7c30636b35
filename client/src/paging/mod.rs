//! Offset paging over the Pokemon index

mod cursor;
mod pager;
mod state;

pub use cursor::{LoadParams, LoadResult, LoadState, PageCursor, next_key, previous_key};
pub use pager::PokemonPager;
pub use state::PagingState;
