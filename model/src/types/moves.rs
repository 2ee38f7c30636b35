//! Learnable moves

use std::cmp::Ordering;

/// A move a Pokemon can learn, reduced to a single learn method
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Display name, e.g. "Vine Whip"
    pub name: String,

    /// e.g. "Level 7", "Machine (TM/TR)", "Egg Move"
    pub learn_method_description: String,

    /// Set for level-up moves (0 = known at start or on evolution)
    pub level_learned_at: Option<u32>,
}

impl Move {
    /// Detail-view ordering: by level with unset levels last, then by name
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.level_learned_at
            .is_none()
            .cmp(&other.level_learned_at.is_none())
            .then_with(|| self.level_learned_at.cmp(&other.level_learned_at))
            .then_with(|| self.name.cmp(&other.name))
    }
}
