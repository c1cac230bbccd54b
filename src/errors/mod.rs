//! Error types and error handling for the syntax analyser.
//!
//! This module defines the error type shared by the lexer, the token
//! sources and the parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, reading and parsing
//! - Error naming and tips used when rendering diagnostics

pub mod errors;
