/*
SPDX-License-Identifier: MPL-2.0
*/

//! Recursive-descent parser for operation-logic expressions.
//!
//! Any structural problem - missing operand, dangling `?` without `:`,
//! unmatched parenthesis, trailing tokens - yields `None`. The evaluator
//! turns that into the caller's fallback value.

use super::lexer::Token;
use reftpl_core::Expr;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parse the whole token stream as one expression.
    pub fn parse(mut self) -> Option<Expr> {
        let expr = self.conditional()?;
        if self.pos != self.tokens.len() {
            return None;
        }
        Some(expr)
    }

    fn conditional(&mut self) -> Option<Expr> {
        let condition = self.value()?;
        let Some(Token::Op(op)) = self.peek() else {
            return Some(condition);
        };
        let op = *op;
        self.pos += 1;
        let comparison = self.value()?;

        let (on_true, on_false) = if matches!(self.peek(), Some(Token::Question)) {
            self.pos += 1;
            let on_true = self.value()?;
            if !matches!(self.peek(), Some(Token::Colon)) {
                return None;
            }
            self.pos += 1;
            let on_false = self.value()?;
            (Some(Box::new(on_true)), Some(Box::new(on_false)))
        } else {
            (None, None)
        };

        Some(Expr::Conditional {
            op,
            condition: Box::new(condition),
            comparison: Box::new(comparison),
            on_true,
            on_false,
        })
    }

    fn value(&mut self) -> Option<Expr> {
        match self.peek()? {
            Token::Value(s) => {
                let expr = Expr::Value(s.clone());
                self.pos += 1;
                Some(expr)
            }
            Token::OpenParen => {
                self.pos += 1;
                let inner = self.conditional()?;
                if !matches!(self.peek(), Some(Token::CloseParen)) {
                    return None;
                }
                self.pos += 1;
                Some(inner)
            }
            _ => None,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::super::lexer::Lexer;
    use super::*;
    use reftpl_core::Operator;

    fn parse(input: &str) -> Option<Expr> {
        Parser::new(Lexer::new(input).tokenize()).parse()
    }

    #[test]
    fn test_bare_value() {
        assert_eq!(parse("'x'"), Some(Expr::Value("'x'".into())));
    }

    #[test]
    fn test_full_conditional() {
        let Some(Expr::Conditional {
            op,
            condition,
            comparison,
            on_true,
            on_false,
        }) = parse("'a' === 'b' ? 'yes' : 'no'")
        else {
            panic!("expected conditional");
        };
        assert_eq!(op, Operator::StrictEq);
        assert_eq!(*condition, Expr::Value("'a'".into()));
        assert_eq!(*comparison, Expr::Value("'b'".into()));
        assert_eq!(*on_true.unwrap(), Expr::Value("'yes'".into()));
        assert_eq!(*on_false.unwrap(), Expr::Value("'no'".into()));
    }

    #[test]
    fn test_branchless_conditional() {
        let Some(Expr::Conditional {
            on_true, on_false, ..
        }) = parse("5 > 3")
        else {
            panic!("expected conditional");
        };
        assert!(on_true.is_none());
        assert!(on_false.is_none());
    }

    #[test]
    fn test_parenthesized_branch() {
        let parsed = parse("'x' = 'x' ? ('a' = 'a' ? 'inner' : 'other') : 'no'");
        assert!(matches!(
            parsed,
            Some(Expr::Conditional { on_true: Some(_), .. })
        ));
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("not a valid expr ("), None);
        assert_eq!(parse("'a' ==="), None);
        assert_eq!(parse("'a' === 'b' ? 'yes'"), None);
        assert_eq!(parse("( 'a' = 'b'"), None);
        assert_eq!(parse("'a' 'b'"), None);
        assert_eq!(parse("? : ?"), None);
    }
}
