// src/utils/label.rs

//! Menu labels and lenient parsing of typed operator input.

use std::sync::OnceLock;

use regex::Regex;

/// Build a `"{name} ({detail})"` label.
pub fn format_label(name: &str, detail: &str) -> String {
    format!("{name} ({detail})")
}

/// Extract the trailing parenthesised id from a label such as `"Ops (TEAM123)"`.
pub fn parse_labelled_id(label: &str) -> Option<&str> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"\(([^()]+)\)\s*$").ok())
        .as_ref()?;

    pattern
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
}

/// Parse a delay in minutes. Anything but a non-negative integer means 0.
pub fn parse_delay(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

/// Resolve a comma-separated selection against `options`.
///
/// Each entry may be a 1-based index, an exact option label, or an id that
/// matches an option's trailing `(id)`. Entries that match nothing are
/// ignored; repeated picks are kept once, in the order first given.
pub fn parse_selection(input: &str, options: &[String]) -> Vec<usize> {
    let mut picked = Vec::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let index = match entry.parse::<usize>() {
            Ok(n) => n.checked_sub(1).filter(|&i| i < options.len()),
            Err(_) => match_option(entry, options),
        };

        if let Some(i) = index {
            if !picked.contains(&i) {
                picked.push(i);
            }
        }
    }

    picked
}

fn match_option(entry: &str, options: &[String]) -> Option<usize> {
    if let Some(i) = options.iter().position(|o| o == entry) {
        return Some(i);
    }
    let wanted = parse_labelled_id(entry).unwrap_or(entry);
    options
        .iter()
        .position(|o| parse_labelled_id(o) == Some(wanted))
}
