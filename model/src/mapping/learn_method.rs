//! Learn-method resolution for moves.
//!
//! A move carries one learn record per version group. The detail view shows a
//! single method, picked in this order:
//!
//! 1. lowest positive `level-up` level -> "Level {n}"
//! 2. first of `machine`, `egg`, `tutor` present -> fixed label
//! 3. a `level-up` record at level 0 -> "Start / Evolution"
//! 4. the first record's method name, capitalised
//! 5. "Unknown" when there are no records

use pokedex_wire::VersionGroupDetail;

use super::names::capitalize_first;

const LEVEL_UP: &str = "level-up";

const METHOD_PRIORITY: [(&str, &str); 3] = [
    ("machine", "Machine (TM/TR)"),
    ("egg", "Egg Move"),
    ("tutor", "Tutor"),
];

/// Resolved learn method for one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnMethod {
    pub description: String,
    pub level: Option<u32>,
}

impl LearnMethod {
    fn at_level(level: u32) -> Self {
        Self {
            description: format!("Level {}", level),
            level: Some(level),
        }
    }

    fn labelled(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            level: None,
        }
    }
}

/// Reduce a move's version-group records to a single learn method
pub fn resolve_learn_method(details: &[VersionGroupDetail]) -> LearnMethod {
    let lowest_level = details
        .iter()
        .filter(|d| d.method() == LEVEL_UP && d.level_learned_at > 0)
        .map(|d| d.level_learned_at)
        .min();
    if let Some(level) = lowest_level {
        return LearnMethod::at_level(level);
    }

    for (method, label) in METHOD_PRIORITY {
        if details.iter().any(|d| d.method() == method) {
            return LearnMethod::labelled(label);
        }
    }

    if details
        .iter()
        .any(|d| d.method() == LEVEL_UP && d.level_learned_at == 0)
    {
        return LearnMethod {
            description: "Start / Evolution".to_string(),
            level: Some(0),
        };
    }

    match details.first() {
        Some(first) => LearnMethod::labelled(capitalize_first(first.method())),
        None => LearnMethod::labelled("Unknown"),
    }
}
