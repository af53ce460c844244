/*
SPDX-License-Identifier: MPL-2.0
*/

//! Tokenizer for operation-logic expressions.
//!
//! Splits on whitespace, but whitespace inside a matching quote pair
//! (`'`, `"`, backtick) does not end a token. Operator tokens are atomic
//! even when not whitespace-delimited from their neighbors, and `?`, `:`,
//! `(`, `)` always stand alone.

use reftpl_core::Operator;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A literal value, quotes retained when the source had them.
    Value(String),
    Op(Operator),
    Question,
    Colon,
    OpenParen,
    CloseParen,
}

/// Character scanner with an explicit position cursor.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_token(&mut self) -> Option<Token> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        let ch = self.peek()?;

        match ch {
            '?' => {
                self.advance();
                Some(Token::Question)
            }
            ':' => {
                self.advance();
                Some(Token::Colon)
            }
            '(' => {
                self.advance();
                Some(Token::OpenParen)
            }
            ')' => {
                self.advance();
                Some(Token::CloseParen)
            }
            '\'' | '"' | '`' => Some(self.quoted(ch)),
            _ => {
                if let Some((op, len)) = Operator::match_prefix(self.rest()) {
                    self.pos += len;
                    return Some(Token::Op(op));
                }
                Some(self.bare_value())
            }
        }
    }

    /// Consume a quoted run, keeping the quotes in the token. An
    /// unterminated quote swallows the rest of the input.
    fn quoted(&mut self, quote: char) -> Token {
        let start = self.pos;
        self.advance();
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == quote {
                break;
            }
        }
        Token::Value(self.input[start..self.pos].to_string())
    }

    /// Consume an unquoted value: everything up to whitespace, a quote, a
    /// single-character token, or an operator.
    fn bare_value(&mut self) -> Token {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || matches!(ch, '?' | ':' | '(' | ')' | '\'' | '"' | '`') {
                break;
            }
            if Operator::match_prefix(self.rest()).is_some() {
                break;
            }
            self.advance();
        }
        Token::Value(self.input[start..self.pos].to_string())
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }
}
