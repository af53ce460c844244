/*
SPDX-License-Identifier: MPL-2.0
*/

//! Operation-logic expression evaluation.

mod lexer;
mod parser;

use lexer::Lexer;
use log::debug;
use parser::Parser;
use reftpl_core::{strip_matching_quotes, Expr};

/// Evaluate a ternary/comparison expression, returning the winning branch
/// with matching enclosing quotes stripped.
///
/// Every failure mode - lex ambiguity, parse failure, structural nonsense -
/// is absorbed into `fallback`. This runs inline during template resolution
/// while a user types, so it must never raise.
pub fn evaluate_expression(expression: &str, fallback: &str) -> String {
    match Parser::new(Lexer::new(expression).tokenize()).parse() {
        Some(expr) => eval(&expr),
        None => {
            debug!("malformed expression {:?}, using fallback", expression);
            fallback.to_string()
        }
    }
}

fn eval(expr: &Expr) -> String {
    match expr {
        Expr::Value(s) => strip_matching_quotes(s).to_string(),
        Expr::Conditional {
            op,
            condition,
            comparison,
            on_true,
            on_false,
        } => {
            let left = eval(condition);
            let right = eval(comparison);
            let outcome = op.compare(&left, &right);
            match (on_true, on_false) {
                (Some(t), Some(f)) => {
                    if outcome {
                        eval(t)
                    } else {
                        eval(f)
                    }
                }
                // No branches: the comparison itself is the result.
                _ => outcome.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_on_malformed() {
        assert_eq!(evaluate_expression("not a valid expr (", "fallback"), "fallback");
        assert_eq!(evaluate_expression("", "x"), "x");
    }

    #[test]
    fn test_ternary() {
        assert_eq!(evaluate_expression("5 > 3 ? 'big' : 'small'", "x"), "big");
        assert_eq!(evaluate_expression("5 < 3 ? 'big' : 'small'", "x"), "small");
    }

    #[test]
    fn test_branchless_yields_bool_literal() {
        assert_eq!(evaluate_expression("'a' === 'a'", "x"), "true");
        assert_eq!(evaluate_expression("'a' === 'b'", "x"), "false");
    }

    #[test]
    fn test_quote_stripping() {
        assert_eq!(evaluate_expression("'a' === 'a' ? 'yes' : 'no'", ""), "yes");
        assert_eq!(evaluate_expression("\"a\" ~~~ 'A' ? \"same\" : 'differs'", ""), "same");
    }

    #[test]
    fn test_contains() {
        assert_eq!(
            evaluate_expression("'placeholder' *= 'hold' ? 'in' : 'out'", ""),
            "in"
        );
    }

    #[test]
    fn test_nested_parenthesized_condition() {
        assert_eq!(
            evaluate_expression("('x' = 'x' ? 'a' : 'b') === 'a' ? 'won' : 'lost'", ""),
            "won"
        );
    }

    #[test]
    fn test_bare_value_passthrough() {
        assert_eq!(evaluate_expression("'free-standing'", ""), "free-standing");
    }
}
