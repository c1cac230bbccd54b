//! Parser state and the terminal-matching primitive.
//!
//! The parser holds exactly one piece of mutable parse state, the lookahead
//! token. Every grammar rule in [`super::stmt`] and [`super::expr`] consumes
//! terminals through [`Parser::accept_terminal`], which is the only place
//! the lookahead advances, and selects between alternatives through
//! [`Parser::select_alternative`]. Those two methods are the only places a
//! syntax error is raised.

use tracing::{debug, trace};

use crate::{
    errors::errors::Error,
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::{nonterminal::Nonterminal, sink::EventSink, stmt::parse_statement_part};

/// Signature shared by every grammar rule.
pub type RuleHandler = fn(&mut Parser<'_>) -> Result<(), Error>;

/// How `X ::= Y (sep Y)*` repetitions are reported to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepetitionShape {
    /// One `X` bracket around every repetition.
    #[default]
    Flat,
    /// After each separator the whole rule is entered again, so the sink
    /// sees a right-nested chain of `X` brackets.
    Nested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub repetition: RepetitionShape,
    /// Report a lookahead that starts none of a rule's alternatives at that
    /// token. When off, the rule recognizes nothing and the mismatch
    /// surfaces at the caller's next expected terminal.
    pub strict_alternatives: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            repetition: RepetitionShape::Flat,
            strict_alternatives: true,
        }
    }
}

/// The recursive-descent parser.
///
/// Borrows its token source and event sink for the duration of one parse.
pub struct Parser<'a> {
    /// The next token not yet accepted
    lookahead: Token,
    source: &'a mut dyn TokenSource,
    sink: &'a mut dyn EventSink,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser primed with the first token of `source`.
    pub fn new(
        source: &'a mut dyn TokenSource,
        sink: &'a mut dyn EventSink,
        options: ParserOptions,
    ) -> Result<Self, Error> {
        let lookahead = source.next_token()?;

        Ok(Parser {
            lookahead,
            source,
            sink,
            options,
        })
    }

    /// Returns the lookahead token.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead.is_one_of_many(kinds)
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn commence(&mut self, nonterminal: Nonterminal) {
        self.sink.commence_nonterminal(nonterminal);
    }

    pub fn finish(&mut self, nonterminal: Nonterminal) {
        self.sink.finish_nonterminal(nonterminal);
    }

    /// Accepts the lookahead if it is of kind `expected`, handing it to the
    /// sink and pulling the next token. Otherwise reports a syntax error
    /// through the sink and returns it.
    pub fn accept_terminal(&mut self, expected: TokenKind) -> Result<(), Error> {
        if self.lookahead.kind != expected {
            return Err(self.report(&format!("'{}'", expected.name())));
        }

        trace!(token = %self.lookahead, line = self.lookahead.line(), "accepted terminal");
        self.sink.insert_terminal(&self.lookahead);
        self.lookahead = self.source.next_token()?;
        Ok(())
    }

    /// Returns the lookahead kind if it is one of `alternatives`.
    ///
    /// Otherwise returns `None`, or with strict alternatives reports a
    /// syntax error listing every alternative.
    pub fn select_alternative(
        &mut self,
        alternatives: &[TokenKind],
    ) -> Result<Option<TokenKind>, Error> {
        if self.at_any(alternatives) {
            return Ok(Some(self.lookahead.kind));
        }

        if !self.options.strict_alternatives {
            return Ok(None);
        }

        let expected = alternatives
            .iter()
            .map(|kind| format!("'{}'", kind.name()))
            .collect::<Vec<_>>()
            .join(", ");

        Err(self.report(&format!("one of {}", expected)))
    }

    /// Recognizes the `(sep Y)*` tail of `X ::= Y (sep Y)*`.
    ///
    /// `element` recognizes one `Y`; `rule` is `X` itself and is re-entered
    /// after each separator when repetitions are nested.
    pub fn repeat(
        &mut self,
        separators: &[TokenKind],
        element: RuleHandler,
        rule: RuleHandler,
    ) -> Result<(), Error> {
        while self.at_any(separators) {
            let separator = self.lookahead.kind;
            self.accept_terminal(separator)?;

            match self.options.repetition {
                RepetitionShape::Flat => element(self)?,
                RepetitionShape::Nested => rule(self)?,
            }
        }

        Ok(())
    }

    fn report(&mut self, expected: &str) -> Error {
        let message = format!(
            "[File: {} - Line {}] - Expected: {} but got: {}",
            self.lookahead.position.file(),
            self.lookahead.line(),
            expected,
            self.lookahead
        );

        debug!(%message, "syntax error");
        self.sink.report_error(&self.lookahead, &message)
    }
}

/// Parses a whole program: a statement part followed by end of file.
///
/// Every notification goes to `sink`; the first mismatch or token source
/// failure ends the parse.
pub fn parse(
    source: &mut dyn TokenSource,
    sink: &mut dyn EventSink,
    options: ParserOptions,
) -> Result<(), Error> {
    let mut parser = Parser::new(source, sink, options)?;

    debug!(file = parser.current_token().position.file(), ?options, "parsing");
    parse_statement_part(&mut parser)?;
    parser.accept_terminal(TokenKind::EOF)?;
    debug!("parsed successfully");

    Ok(())
}
