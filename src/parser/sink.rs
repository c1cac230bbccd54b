//! The event protocol between the parser and whatever consumes its output.

use tracing::{debug, trace};

use crate::{errors::errors::Error, lexer::tokens::Token};

use super::nonterminal::Nonterminal;

/// Receives the parser's grammar-rule boundaries, accepted terminals and
/// fatal errors, in the order the parser recognizes them.
pub trait EventSink {
    fn commence_nonterminal(&mut self, nonterminal: Nonterminal);

    fn finish_nonterminal(&mut self, nonterminal: Nonterminal);

    fn insert_terminal(&mut self, token: &Token);

    /// Records a fatal syntax error at `token` and returns the error the
    /// parser propagates. The parser stops recognizing after this call.
    fn report_error(&mut self, token: &Token, message: &str) -> Error {
        Error::syntax(token, message.to_string())
    }
}

/// A single notification received by a [`TraceSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Commence(Nonterminal),
    Finish(Nonterminal),
    Terminal(Token),
}

/// Records every notification in order.
#[derive(Debug, Default)]
pub struct TraceSink {
    events: Vec<Event>,
    error: Option<String>,
}

impl TraceSink {
    pub fn new() -> Self {
        TraceSink::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// The accepted terminals, in acceptance order.
    pub fn terminals(&self) -> Vec<&Token> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Terminal(token) => Some(token),
                _ => None,
            })
            .collect()
    }

    /// How many times `nonterminal` was entered.
    pub fn commenced(&self, nonterminal: Nonterminal) -> usize {
        self.events
            .iter()
            .filter(|event| **event == Event::Commence(nonterminal))
            .count()
    }

    /// How many times `nonterminal` was left.
    pub fn finished(&self, nonterminal: Nonterminal) -> usize {
        self.events
            .iter()
            .filter(|event| **event == Event::Finish(nonterminal))
            .count()
    }

    /// The message of the reported error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One line per event, nonterminals indented by nesting depth.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut depth = 0;

        for event in &self.events {
            match event {
                Event::Commence(nonterminal) => {
                    out.push_str(&format!("{}begin {}\n", "  ".repeat(depth), nonterminal));
                    depth += 1;
                }
                Event::Finish(nonterminal) => {
                    depth = depth.saturating_sub(1);
                    out.push_str(&format!("{}end {}\n", "  ".repeat(depth), nonterminal));
                }
                Event::Terminal(token) => {
                    out.push_str(&format!("{}{}\n", "  ".repeat(depth), token));
                }
            }
        }

        out
    }
}

impl EventSink for TraceSink {
    fn commence_nonterminal(&mut self, nonterminal: Nonterminal) {
        self.events.push(Event::Commence(nonterminal));
    }

    fn finish_nonterminal(&mut self, nonterminal: Nonterminal) {
        self.events.push(Event::Finish(nonterminal));
    }

    fn insert_terminal(&mut self, token: &Token) {
        trace!(%token, "recorded terminal");
        self.events.push(Event::Terminal(token.clone()));
    }

    fn report_error(&mut self, token: &Token, message: &str) -> Error {
        debug!(%message, "recorded syntax error");
        self.error = Some(message.to_string());
        Error::syntax(token, message.to_string())
    }
}
