//! `GET /pokemon?limit=N&offset=M`

use serde::Deserialize;

use crate::resource::NamedResource;

/// One page of the Pokemon index as the API returns it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse {
    /// Total number of Pokemon known to the API
    pub count: u32,

    /// Url of the following page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,

    /// Url of the preceding page, absent on the first page
    #[serde(default)]
    pub previous: Option<String>,

    pub results: Vec<NamedResource>,
}

impl ListResponse {
    /// Whether the API reports a further page after this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
