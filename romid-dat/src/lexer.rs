//! Tokenizer for the ClrMamePro DAT format.
//!
//! The lexer knows nothing about blocks or fields; it only classifies
//! characters into tokens. It never fails: anything it does not recognize
//! becomes a [`TokenKind::Illegal`] token, and once the input is exhausted
//! every further call to [`Lexer::scan`] returns [`TokenKind::Eof`].

use std::iter::Peekable;
use std::str::Chars;

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace, always reported as a single space.
    Whitespace,
    /// A bare word (letters, digits, hyphens) or a quoted literal.
    Ident,
    LeftParen,
    RightParen,
    Eof,
    /// A character that matches no other rule.
    Illegal,
}

/// A token and the text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Character-level scanner over DAT text.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Scan the next token, consuming only the characters that form it.
    pub fn scan(&mut self) -> Token {
        let Some(&ch) = self.chars.peek() else {
            return Token::eof();
        };

        if ch.is_whitespace() {
            self.scan_whitespace()
        } else if is_letter_or_digit(ch) {
            self.scan_ident()
        } else if ch == '"' {
            self.scan_quoted()
        } else {
            self.chars.next();
            match ch {
                '(' => Token::new(TokenKind::LeftParen, "("),
                ')' => Token::new(TokenKind::RightParen, ")"),
                // Echo the offending character so parse errors can name it.
                _ => Token::new(TokenKind::Illegal, ch),
            }
        }
    }

    fn scan_whitespace(&mut self) -> Token {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        Token::new(TokenKind::Whitespace, " ")
    }

    fn scan_ident(&mut self) -> Token {
        let mut text = String::new();
        while let Some(c) = self
            .chars
            .next_if(|&c| is_letter_or_digit(c) || c == '-')
        {
            text.push(c);
        }
        Token::new(TokenKind::Ident, text)
    }

    /// Quoted literal: everything up to and including the closing quote,
    /// or to end of input if the quote is never closed.
    fn scan_quoted(&mut self) -> Token {
        let mut text = String::new();
        if let Some(open) = self.chars.next() {
            text.push(open);
        }
        for c in self.chars.by_ref() {
            text.push(c);
            if c == '"' {
                break;
            }
        }
        Token::new(TokenKind::Ident, text)
    }
}

/// Any letter (general category L*) or decimal digit (Nd). Letter numbers
/// like `ᛮ`, superscripts, fractions and combining marks are excluded.
fn is_letter_or_digit(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
        || c.general_category() == GeneralCategory::DecimalNumber
}

#[cfg(test)]
#[path = "tests/lexer_tests.rs"]
mod tests;
