/*
SPDX-License-Identifier: MPL-2.0
*/

//! Parsed placeholder occurrences.
//!
//! A placeholder is a balanced `{...}` region of a template. Its body names
//! a field, optionally followed by a splice directive and a trailing
//! operation-logic expression:
//!
//! ```text
//! {name}
//! {name[0..3]}            char-range slice, negative offsets from the end
//! {list[,:1]}             split on "," and select index 1
//! {pronoun === 'They' ? 'colleagues' : 'colleague'}
//! ```

use std::ops::Range;

/// One placeholder occurrence, in appearance order within its template.
///
/// Occurrences are reported as a `Vec<Placeholder>`; per-occurrence fields
/// that are absent stay `None` rather than being dropped, so the collection
/// is always index-aligned with the discovered `{...}` regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// The identifier used to look up the data dictionary.
    pub field: String,
    /// Byte offsets of the full `{...}` region, braces included.
    pub span: Range<usize>,
    /// Optional slice applied to the looked-up value.
    pub splice: Option<Splice>,
    /// Optional trailing expression, evaluated with the resolved value as
    /// the left-hand operand.
    pub logic: Option<String>,
}

/// A splice directive attached to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Splice {
    /// Character-offset slice; `None` ends are open, negative offsets count
    /// from the end of the value.
    CharRange {
        start: Option<isize>,
        end: Option<isize>,
    },
    /// Split the value on `delimiter` and select `index` (negative counts
    /// from the end).
    DelimiterIndex { delimiter: String, index: isize },
}

impl Splice {
    /// Apply this splice to a resolved value.
    ///
    /// Out-of-range offsets clamp; an out-of-range delimiter index yields
    /// the empty string.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Splice::CharRange { start, end } => {
                let chars: Vec<char> = value.chars().collect();
                let len = chars.len();
                let start = clamp_offset(*start, len, 0);
                let end = clamp_offset(*end, len, len);
                if start >= end {
                    return String::new();
                }
                chars[start..end].iter().collect()
            }
            Splice::DelimiterIndex { delimiter, index } => {
                let parts: Vec<&str> = value.split(delimiter.as_str()).collect();
                let idx = if *index < 0 {
                    parts.len() as isize + index
                } else {
                    *index
                };
                if idx < 0 || idx as usize >= parts.len() {
                    return String::new();
                }
                parts[idx as usize].trim().to_string()
            }
        }
    }
}

fn clamp_offset(offset: Option<isize>, len: usize, default: usize) -> usize {
    match offset {
        None => default,
        Some(i) if i < 0 => len.saturating_sub(i.unsigned_abs()),
        Some(i) => (i as usize).min(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_range() {
        let splice = Splice::CharRange {
            start: Some(0),
            end: Some(3),
        };
        assert_eq!(splice.apply("placeholder"), "pla");
    }

    #[test]
    fn test_char_range_negative() {
        let splice = Splice::CharRange {
            start: Some(-4),
            end: None,
        };
        assert_eq!(splice.apply("placeholder"), "lder");
    }

    #[test]
    fn test_char_range_out_of_bounds() {
        let splice = Splice::CharRange {
            start: Some(5),
            end: Some(99),
        };
        assert_eq!(splice.apply("abcdef"), "f");
        let splice = Splice::CharRange {
            start: Some(4),
            end: Some(2),
        };
        assert_eq!(splice.apply("abcdef"), "");
    }

    #[test]
    fn test_delimiter_index() {
        let splice = Splice::DelimiterIndex {
            delimiter: ",".to_string(),
            index: 1,
        };
        assert_eq!(splice.apply("a,b,c"), "b");
    }

    #[test]
    fn test_delimiter_index_negative() {
        let splice = Splice::DelimiterIndex {
            delimiter: ",".to_string(),
            index: -1,
        };
        assert_eq!(splice.apply("a, b, c"), "c");
    }

    #[test]
    fn test_delimiter_index_out_of_range() {
        let splice = Splice::DelimiterIndex {
            delimiter: ",".to_string(),
            index: 7,
        };
        assert_eq!(splice.apply("a,b"), "");
    }
}
