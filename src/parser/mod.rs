//! Parser module validating a token stream against the statement grammar.
//!
//! This module contains the recursive-descent parser. Rather than building
//! a tree itself it reports every grammar rule it enters and leaves, and
//! every terminal it accepts, to an [`sink::EventSink`]. It handles:
//!
//! - Statement parsing (assignments, conditionals, loops, procedure calls)
//! - Condition and arithmetic expression parsing
//! - Single-token lookahead and terminal matching
//! - Position-annotated syntax errors on the first mismatch
//!
//! Each nonterminal is a function in [`stmt`] or [`expr`]; statement
//! dispatch goes through the lookup table in [`lookups`].

pub mod expr;
pub mod lookups;
pub mod nonterminal;
pub mod parser;
pub mod sink;
pub mod stmt;

#[cfg(test)]
mod tests;
