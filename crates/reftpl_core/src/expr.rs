/*
SPDX-License-Identifier: MPL-2.0
*/

//! Expression AST and the comparison operator table.
//!
//! The operation-logic language is a tiny ternary/comparison grammar:
//!
//! ```text
//! expr        := value | conditional
//! conditional := value OPERATOR value ('?' value ':' value)?
//! value       := VALUE | '(' conditional ')'
//! ```
//!
//! Operands are strings; numeric operators parse both sides as floats.

/// A node in a parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value, quotes still attached if the source had them.
    Value(String),
    /// A comparison, with optional `? :` branches.
    Conditional {
        op: Operator,
        condition: Box<Expr>,
        comparison: Box<Expr>,
        on_true: Option<Box<Expr>>,
        on_false: Option<Box<Expr>>,
    },
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `*=` - left contains right as a substring.
    Contains,
    /// `~~~` - case-insensitive equality.
    CaseInsensitiveEq,
    /// `!~~` - case-insensitive inequality.
    CaseInsensitiveNe,
    /// `===` or `=` - exact string equality.
    StrictEq,
    /// `==` - numeric comparison when both sides parse as numbers,
    /// string equality otherwise.
    LooseEq,
    /// `!==` or `!=` - negated exact equality.
    StrictNe,
    Greater,
    Less,
    GreaterEq,
    LessEq,
}

/// The operator token table, longest tokens first so that multi-character
/// operators win during lexing. Static and immutable for the process
/// lifetime.
pub const OPERATOR_TOKENS: &[(&str, Operator)] = &[
    ("===", Operator::StrictEq),
    ("!==", Operator::StrictNe),
    ("~~~", Operator::CaseInsensitiveEq),
    ("!~~", Operator::CaseInsensitiveNe),
    (">=", Operator::GreaterEq),
    ("<=", Operator::LessEq),
    ("*=", Operator::Contains),
    ("==", Operator::LooseEq),
    ("!=", Operator::StrictNe),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("=", Operator::StrictEq),
];

impl Operator {
    /// Match an operator token at the start of `input`, returning the
    /// operator and the token length.
    pub fn match_prefix(input: &str) -> Option<(Operator, usize)> {
        OPERATOR_TOKENS
            .iter()
            .find(|(token, _)| input.starts_with(token))
            .map(|(token, op)| (*op, token.len()))
    }

    /// Compare two string operands under this operator's semantics.
    pub fn compare(&self, left: &str, right: &str) -> bool {
        match self {
            Operator::Contains => left.contains(right),
            Operator::CaseInsensitiveEq => left.to_lowercase() == right.to_lowercase(),
            Operator::CaseInsensitiveNe => left.to_lowercase() != right.to_lowercase(),
            Operator::StrictEq => left == right,
            Operator::StrictNe => left != right,
            Operator::LooseEq => match (left.parse::<f64>(), right.parse::<f64>()) {
                (Ok(l), Ok(r)) => l == r,
                _ => left == right,
            },
            Operator::Greater | Operator::Less | Operator::GreaterEq | Operator::LessEq => {
                let (Ok(l), Ok(r)) = (left.parse::<f64>(), right.parse::<f64>()) else {
                    return false;
                };
                match self {
                    Operator::Greater => l > r,
                    Operator::Less => l < r,
                    Operator::GreaterEq => l >= r,
                    Operator::LessEq => l <= r,
                    _ => unreachable!(),
                }
            }
        }
    }
}

/// Strip one pair of matching enclosing quotes (`'`, `"`, or backtick).
///
/// Quotes are removed only when the same quote character encloses the whole
/// string; unmatched or interior quotes are left alone.
pub fn strip_matching_quotes(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), s.chars().last()) {
        (Some(first), Some(last))
            if first == last && s.len() >= 2 && matches!(first, '\'' | '"' | '`') =>
        {
            &s[first.len_utf8()..s.len() - last.len_utf8()]
        }
        _ => s,
    }
}
