/*
SPDX-License-Identifier: MPL-2.0
*/

//! Placeholder scanning and body parsing.
//!
//! The default scanner walks the template once and reports the outermost
//! balanced `{...}` regions, left to right. Nested regions (`{a{b}c}`) are
//! reported as a single outer span; the resolver resolves the inner
//! placeholders of such a body before parsing it. Unbalanced braces are
//! skipped as no-match rather than reported.

use regex::Regex;
use reftpl_core::{Placeholder, Splice};
use std::ops::Range;

/// A raw `{...}` region: byte span (braces included) and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRegion {
    pub span: Range<usize>,
    pub body: String,
}

/// Scan for outermost balanced brace regions.
pub fn scan_balanced(template: &str) -> Vec<RawRegion> {
    let mut regions = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for (idx, ch) in template.char_indices() {
        match ch {
            '{' => stack.push(idx),
            '}' => {
                if let Some(open) = stack.pop() {
                    // Only outermost pairs are reported; inner pairs close
                    // while the stack is still non-empty.
                    if stack.is_empty() {
                        let span = open..idx + 1;
                        regions.push(RawRegion {
                            body: template[open + 1..idx].to_string(),
                            span,
                        });
                    }
                }
            }
            _ => {}
        }
    }
    // Anything still open is unbalanced; complete pairs nested inside an
    // unclosed opener were swallowed above, so rescan the tail for them.
    if let Some(&dangling) = stack.first() {
        let tail = &template[dangling + 1..];
        for mut inner in scan_balanced(tail) {
            inner.span = inner.span.start + dangling + 1..inner.span.end + dangling + 1;
            regions.push(inner);
        }
        regions.sort_by_key(|r| r.span.start);
    }
    regions
}

/// Scan with a caller-supplied pattern instead of the balanced scanner.
///
/// Each match is taken as one region; enclosing braces, when the pattern
/// captures them, are stripped from the body.
pub fn scan_with_pattern(template: &str, pattern: &Regex) -> Vec<RawRegion> {
    pattern
        .find_iter(template)
        .map(|m| {
            let text = m.as_str();
            let body = text
                .strip_prefix('{')
                .and_then(|t| t.strip_suffix('}'))
                .unwrap_or(text);
            RawRegion {
                span: m.start()..m.end(),
                body: body.to_string(),
            }
        })
        .collect()
}

/// Parse a brace-free body into a placeholder.
///
/// Grammar: `field splice? logic?` where `field` is
/// `[A-Za-z_][A-Za-z0-9_.-]*`,
/// `splice` is `[a..b]` or `[delim:index]`, and anything left over is the
/// operation-logic expression. Returns `None` when the body does not fit
/// the grammar; the caller treats that region as no-match.
pub fn parse_body(body: &str, span: Range<usize>) -> Option<Placeholder> {
    let body = body.trim();
    if !body
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    {
        return None;
    }
    let field_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        .unwrap_or(body.len());
    let field = body[..field_len].to_string();
    let mut rest = &body[field_len..];

    let splice = if let Some(stripped) = rest.strip_prefix('[') {
        let close = stripped.find(']')?;
        let directive = &stripped[..close];
        rest = &stripped[close + 1..];
        Some(parse_splice(directive)?)
    } else {
        None
    };

    let rest = rest.trim();
    let logic = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };

    Some(Placeholder {
        field,
        span,
        splice,
        logic,
    })
}

fn parse_splice(directive: &str) -> Option<Splice> {
    if let Some((start, end)) = directive.split_once("..") {
        let parse = |s: &str| -> Option<Option<isize>> {
            let s = s.trim();
            if s.is_empty() {
                Some(None)
            } else {
                s.parse::<isize>().ok().map(Some)
            }
        };
        return Some(Splice::CharRange {
            start: parse(start)?,
            end: parse(end)?,
        });
    }
    // Split at the last ':' so a colon delimiter itself stays intact
    // ("[::1]" means delimiter ":", index 1).
    let (delimiter, index) = directive.rsplit_once(':')?;
    if delimiter.is_empty() {
        return None;
    }
    let index = index.trim().parse::<isize>().ok()?;
    Some(Splice::DelimiterIndex {
        delimiter: delimiter.to_string(),
        index,
    })
}
