//! Token sources feed the parser one token at a time.

use std::{collections::VecDeque, fs, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

/// Produces the tokens of one input.
///
/// At the end of input an implementation keeps returning an end-of-file
/// token; errors are reserved for read and lexical failures.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// A [`TokenSource`] over an already tokenized input.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof_position = tokens
            .last()
            .map(|token| token.position.clone())
            .unwrap_or_else(Position::null);

        TokenStream {
            tokens: tokens.into(),
            eof: MK_TOKEN!(TokenKind::EOF, String::new(), eof_position),
        }
    }

    /// Tokenizes `source`, naming it `file` in positions.
    pub fn from_source(source: String, file: &str) -> Result<Self, Error> {
        Ok(TokenStream::new(tokenize(source, Some(file.to_string()))?))
    }

    /// Reads and tokenizes the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = path.to_string_lossy().to_string();
        let source = fs::read_to_string(path).map_err(|error| {
            Error::new(
                ErrorImpl::Io {
                    reason: error.to_string(),
                },
                Position(0, Rc::new(file.clone())),
            )
        })?;

        TokenStream::from_source(source, &file)
    }

    /// Number of tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, Error> {
        match self.tokens.pop_front() {
            Some(token) => {
                if token.kind == TokenKind::EOF {
                    self.eof = token.clone();
                }
                Ok(token)
            }
            None => Ok(self.eof.clone()),
        }
    }
}
