use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("loop", TokenKind::Loop);
        map.insert("call", TokenKind::Call);
        map.insert("do", TokenKind::Do);
        map.insert("until", TokenKind::Until);
        map.insert("for", TokenKind::For);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    NumberConstant,
    StringConstant,

    // Reserved
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Loop,
    Call,
    Do,
    Until,
    For,

    Becomes, // :=
    Semicolon,
    Comma,
    OpenParen,
    CloseParen,

    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
    Less,
    LessEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
}

impl TokenKind {
    /// The name used for this symbol in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of file",
            TokenKind::Identifier => "identifier",
            TokenKind::NumberConstant => "numberConstant",
            TokenKind::StringConstant => "stringConstant",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Loop => "loop",
            TokenKind::Call => "call",
            TokenKind::Do => "do",
            TokenKind::Until => "until",
            TokenKind::For => "for",
            TokenKind::Becomes => ":=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
        }
    }

    /// Whether tokens of this kind carry a spelling of their own.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::NumberConstant | TokenKind::StringConstant
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.line()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of file"),
            TokenKind::StringConstant => write!(f, "{} \"{}\"", self.kind, self.value),
            kind if kind.has_value() => write!(f, "{} '{}'", self.kind, self.value),
            _ => write!(f, "'{}'", self.value),
        }
    }
}
