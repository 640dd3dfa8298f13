use crate::lexer::{Lexer, Token, TokenKind};

/// One-token pushback buffer over a [`Lexer`].
///
/// `unscan` marks the most recently returned token for replay on the next
/// `scan`. Only a single token can be pushed back; callers must scan once
/// between two calls to `unscan`.
pub struct TokenCursor<'a> {
    lexer: Lexer<'a>,
    last: Token,
    replay: bool,
}

impl<'a> TokenCursor<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            last: Token::eof(),
            replay: false,
        }
    }

    /// Return the pushed-back token if there is one, otherwise the next
    /// token from the lexer.
    pub fn scan(&mut self) -> Token {
        if self.replay {
            self.replay = false;
            return self.last.clone();
        }
        self.last = self.lexer.scan();
        self.last.clone()
    }

    /// Push the last scanned token back so the next `scan` returns it again.
    pub fn unscan(&mut self) {
        debug_assert!(!self.replay, "unscan called twice without a scan");
        self.replay = true;
    }

    /// Like `scan`, but skips a single leading whitespace token.
    ///
    /// The lexer collapses whitespace runs, so two whitespace tokens can never
    /// be adjacent.
    pub fn scan_ignoring_whitespace(&mut self) -> Token {
        let token = self.scan();
        if token.kind == TokenKind::Whitespace {
            return self.scan();
        }
        token
    }
}
