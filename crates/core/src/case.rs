// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier case conversion
//!
//! Pure string transforms shared by the projector and the project info:
//!
//! - `to_camel_case("get-items")` → `getItems`
//! - `to_pascal_case("my_service")` → `MyService`
//! - `to_text_space("NightlyJob")` → `Nightly Job`
//! - `to_kebab("EventBridge")` → `event-bridge`

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert to camelCase.
///
/// The first word character is lowercased, any character starting a new
/// word (or already uppercase) is uppercased, and whitespace and `-` are
/// removed. Underscores do not start a new word.
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;

    for (idx, c) in input.chars().enumerate() {
        let at_boundary = is_word(c) && !prev.is_some_and(is_word);
        if idx == 0 && is_word(c) {
            out.extend(c.to_lowercase());
        } else if c.is_uppercase() || at_boundary {
            out.extend(c.to_uppercase());
        } else if !c.is_whitespace() && c != '-' {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Convert to PascalCase.
///
/// `-` and `_` separate words, other punctuation is dropped. Words after
/// the first are capitalized with the remainder lowercased; the first word
/// keeps its inner casing so `myService` stays `MyService`. An inner word of
/// one character is not capitalized: `get-a-item` → `GetaItem`.
pub fn to_pascal_case(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| is_word(*c) || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    for (idx, word) in cleaned.split_whitespace().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if idx > 0 && word.chars().nth(1).is_none() {
            // Single-character inner words are joined as written
            out.push(first);
            continue;
        }
        out.extend(first.to_uppercase());
        if idx == 0 {
            out.extend(chars);
        } else {
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }

    out
}

/// Convert to space-separated title text, splitting before each uppercase.
pub fn to_text_space(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }

    let trimmed = out.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert to lowercase kebab form, splitting before each uppercase.
pub fn to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.trim().chars() {
        if c.is_uppercase() {
            out.push('-');
        }
        out.extend(c.to_lowercase());
    }

    out.trim_start_matches('-').to_string()
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
