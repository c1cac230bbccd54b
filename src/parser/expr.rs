use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    lookups::{
        ADDING_OPERATORS, CONDITIONAL_OPERATORS, CONDITION_OPERANDS, FACTOR_STARTS,
        MULTIPLYING_OPERATORS,
    },
    nonterminal::Nonterminal,
    parser::Parser,
};

/// `Condition ::= identifier ConditionalOperator ( identifier | numberConstant | stringConstant )`
pub fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::Condition);
    parser.accept_terminal(TokenKind::Identifier)?;
    parse_conditional_operator(parser)?;

    if let Some(kind) = parser.select_alternative(CONDITION_OPERANDS)? {
        parser.accept_terminal(kind)?;
    }

    parser.finish(Nonterminal::Condition);
    Ok(())
}

pub fn parse_conditional_operator(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::ConditionalOperator);
    if let Some(kind) = parser.select_alternative(CONDITIONAL_OPERATORS)? {
        parser.accept_terminal(kind)?;
    }
    parser.finish(Nonterminal::ConditionalOperator);
    Ok(())
}

/// `Expression ::= Term ( (+ | -) Term )*`
pub fn parse_expression(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::Expression);
    parse_term(parser)?;
    parser.repeat(ADDING_OPERATORS, parse_term, parse_expression)?;
    parser.finish(Nonterminal::Expression);
    Ok(())
}

/// `Term ::= Factor ( (* | / | %) Factor )*`
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::Term);
    parse_factor(parser)?;
    parser.repeat(MULTIPLYING_OPERATORS, parse_factor, parse_term)?;
    parser.finish(Nonterminal::Term);
    Ok(())
}

pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::Factor);

    match parser.select_alternative(FACTOR_STARTS)? {
        Some(TokenKind::OpenParen) => {
            parser.accept_terminal(TokenKind::OpenParen)?;
            parse_expression(parser)?;
            parser.accept_terminal(TokenKind::CloseParen)?;
        }
        Some(kind) => parser.accept_terminal(kind)?,
        None => {}
    }

    parser.finish(Nonterminal::Factor);
    Ok(())
}
