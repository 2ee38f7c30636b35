use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const API_BASE_VAR: &str = "POKEDEX_API_BASE";
const SPRITE_BASE_VAR: &str = "POKEDEX_SPRITE_BASE";
const TIMEOUT_VAR: &str = "POKEDEX_TIMEOUT_SECS";

/// Where to reach the API and its sprite mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub sprite_base: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sprite_base: DEFAULT_SPRITE_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `POKEDEX_API_BASE`, `POKEDEX_SPRITE_BASE`
    /// and `POKEDEX_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_VAR) {
            config.api_base = base;
        }
        if let Some(base) = lookup(SPRITE_BASE_VAR) {
            config.sprite_base = base;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "Ignoring invalid {}", TIMEOUT_VAR),
            }
        }

        config.normalized()
    }

    /// Strip trailing slashes so paths can be appended with a single `/`
    pub fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self.sprite_base = self.sprite_base.trim_end_matches('/').to_string();
        self
    }
}

/// Offset paging parameters.
///
/// The page size is never zero; [`PagingConfig::new`] is the only way to pick
/// one other than the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    start_offset: u32,
    page_size: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            start_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    /// Returns `None` for a zero page size
    pub fn new(start_offset: u32, page_size: u32) -> Option<Self> {
        (page_size > 0).then_some(Self {
            start_offset,
            page_size,
        })
    }

    /// Offset of the first page
    pub fn start_offset(&self) -> u32 {
        self.start_offset
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
