//! Lexical analysis module for the syntax analyser.
//!
//! This module turns source text into the tokens the parser consumes. It
//! handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, constants, and operators
//! - Line tracking for error reporting
//! - Comments and whitespace handling
//! - Feeding tokens to the parser one at a time through [`source::TokenSource`]

pub mod lexer;
pub mod source;
pub mod tokens;
