use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    token: Option<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            token: None,
        }
    }

    /// Creates a syntax error located at `token`.
    pub fn syntax(token: &Token, message: String) -> Self {
        Error {
            internal_error: ErrorImpl::SyntaxError { message },
            position: token.position.clone(),
            token: Some(token.clone()),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::SyntaxError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::Io { .. } => "IoError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { message } => ErrorTip::Suggestion(message.clone()),
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "Unrecognised character sequence `{}`",
                token
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String constants must be closed on the line they start",
            )),
            ErrorImpl::Io { reason } => ErrorTip::Suggestion(reason.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => write!(f, "{}", self.internal_error),
            _ => write!(f, "{}: {}", self.position, self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("{message}")]
    SyntaxError { message: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string constant")]
    UnterminatedString,
    #[error("could not read source: {reason}")]
    Io { reason: String },
}
