use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

use super::{parser::RuleHandler, stmt::*};

pub type StmtLookup = HashMap<TokenKind, RuleHandler>;

/// Tokens that start a statement, in the order diagnostics list them.
pub const STATEMENT_STARTS: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Call,
    TokenKind::Do,
    TokenKind::For,
];

pub const CONDITIONAL_OPERATORS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Equals,
    TokenKind::NotEquals,
    TokenKind::Less,
    TokenKind::LessEquals,
];

pub const CONDITION_OPERANDS: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::NumberConstant,
    TokenKind::StringConstant,
];

pub const ADDING_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Dash];

pub const MULTIPLYING_OPERATORS: &[TokenKind] =
    &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent];

pub const FACTOR_STARTS: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::NumberConstant,
    TokenKind::OpenParen,
];

lazy_static! {
    pub static ref STMT_LOOKUP: StmtLookup = create_stmt_lookup();
}

fn create_stmt_lookup() -> StmtLookup {
    let mut lookup: StmtLookup = HashMap::new();

    lookup.insert(TokenKind::Identifier, parse_assignment_stmt);
    lookup.insert(TokenKind::If, parse_if_stmt);
    lookup.insert(TokenKind::While, parse_while_stmt);
    lookup.insert(TokenKind::Call, parse_procedure_stmt);
    lookup.insert(TokenKind::Do, parse_until_stmt);
    lookup.insert(TokenKind::For, parse_for_stmt);

    lookup
}
