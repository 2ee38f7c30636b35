//! Display-name formatting

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `thunder-punch` -> `Thunder Punch`
pub fn format_move_name(raw: &str) -> String {
    raw.replace('-', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
