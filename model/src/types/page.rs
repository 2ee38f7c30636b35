//! Page of list entries

use super::pokemon::Pokemon;

/// One fetched batch of the index plus its continuation keys.
///
/// Keys are item offsets: `previous_key` is where the preceding page starts,
/// `next_key` where the following one starts. `None` means there is nothing
/// further in that direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub items: Vec<Pokemon>,
    pub previous_key: Option<u32>,
    pub next_key: Option<u32>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this is the last page of the index
    pub fn is_last(&self) -> bool {
        self.next_key.is_none()
    }
}
