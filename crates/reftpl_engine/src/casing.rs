/*
SPDX-License-Identifier: MPL-2.0
*/

//! Position-sensitive letter casing for substituted values.
//!
//! A replacement that opens a sentence or a heading gets an initial
//! capital. Values for proper-noun-like fields (names, addresses) and
//! acronyms keep their own casing anywhere else; everything else is
//! lowercased at the first character so substitutions read naturally
//! mid-sentence.

/// Field-name keywords whose values are proper-noun-like and keep their
/// own casing mid-sentence.
const PROPER_FIELD_KEYWORDS: &[&str] = &[
    "name", "date", "address", "email", "phone", "city", "state", "country", "company", "month",
    "day",
];

/// Opening punctuation that marks a heading position.
const OPENING_PUNCTUATION: &[char] = &['(', '[', '"', '\u{201C}', '\u{2018}'];

/// Case a resolved value according to where its placeholder sits in the
/// template.
pub fn apply_casing(value: &str, template: &str, span_start: usize, field: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if starts_sentence(template, span_start) || starts_heading(template, span_start) {
        return capitalize_first(value);
    }
    if is_proper_field(field) || is_acronym(field) || is_acronym(value) {
        return value.to_string();
    }
    lowercase_first(value)
}

/// True at the start of the template or after sentence-ending punctuation.
fn starts_sentence(template: &str, at: usize) -> bool {
    let mut before = template[..at].chars().rev().skip_while(|c| c.is_whitespace());
    match before.next() {
        None => true,
        Some(c) => matches!(c, '.' | '!' | '?'),
    }
}

/// True when only whitespace separates the placeholder from an opening
/// punctuation mark or from a blank line (two or more newlines).
fn starts_heading(template: &str, at: usize) -> bool {
    let mut newlines = 0;
    for c in template[..at].chars().rev() {
        if c == '\n' {
            newlines += 1;
            if newlines >= 2 {
                return true;
            }
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        return OPENING_PUNCTUATION.contains(&c);
    }
    false
}

fn is_proper_field(field: &str) -> bool {
    let lowered = field.to_lowercase();
    PROPER_FIELD_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// All-uppercase identifiers and values (DOI, USA) are left alone.
fn is_acronym(s: &str) -> bool {
    let mut letters = s.chars().filter(|c| c.is_alphabetic());
    let has_letters = s.chars().any(|c| c.is_alphabetic());
    has_letters && s.chars().count() > 1 && letters.all(|c| c.is_uppercase())
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
