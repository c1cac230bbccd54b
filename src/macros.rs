//! Utility macros for the syntax analyser.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's spelling
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberConstant, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for a token with a fixed spelling.
///
/// Generates a handler function that pushes a token of the given kind at the
/// lexer's current line and advances past the spelling.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal spelling (used for the token value and length)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Becomes, ":="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let position = lexer.position();
            lexer.push($crate::MK_TOKEN!($kind, String::from($value), position));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
