use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::{parse_condition, parse_expression},
    lookups::{STATEMENT_STARTS, STMT_LOOKUP},
    nonterminal::Nonterminal,
    parser::Parser,
};

/// `StatementPart ::= begin StatementList end`
pub fn parse_statement_part(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::StatementPart);
    parser.accept_terminal(TokenKind::Begin)?;
    parse_statement_list(parser)?;
    parser.accept_terminal(TokenKind::End)?;
    parser.finish(Nonterminal::StatementPart);
    Ok(())
}

/// `StatementList ::= Statement ( ; Statement )*`
pub fn parse_statement_list(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::StatementList);
    parse_statement(parser)?;
    parser.repeat(&[TokenKind::Semicolon], parse_statement, parse_statement_list)?;
    parser.finish(Nonterminal::StatementList);
    Ok(())
}

/// Dispatches on the lookahead alone.
pub fn parse_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::Statement);
    if let Some(kind) = parser.select_alternative(STATEMENT_STARTS)? {
        if let Some(handler) = STMT_LOOKUP.get(&kind) {
            handler(parser)?;
        }
    }
    parser.finish(Nonterminal::Statement);
    Ok(())
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::AssignmentStatement);
    parser.accept_terminal(TokenKind::Identifier)?;
    parser.accept_terminal(TokenKind::Becomes)?;

    if parser.at(TokenKind::StringConstant) {
        parser.accept_terminal(TokenKind::StringConstant)?;
    } else {
        parse_expression(parser)?;
    }

    parser.finish(Nonterminal::AssignmentStatement);
    Ok(())
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::IfStatement);
    parser.accept_terminal(TokenKind::If)?;
    parse_condition(parser)?;
    parser.accept_terminal(TokenKind::Then)?;
    parse_statement_list(parser)?;

    if parser.at(TokenKind::Else) {
        parser.accept_terminal(TokenKind::Else)?;
        parse_statement_list(parser)?;
    }

    parser.accept_terminal(TokenKind::End)?;
    parser.accept_terminal(TokenKind::If)?;
    parser.finish(Nonterminal::IfStatement);
    Ok(())
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::WhileStatement);
    parser.accept_terminal(TokenKind::While)?;
    parse_condition(parser)?;
    parser.accept_terminal(TokenKind::Loop)?;
    parse_statement_list(parser)?;
    parser.accept_terminal(TokenKind::End)?;
    parser.accept_terminal(TokenKind::Loop)?;
    parser.finish(Nonterminal::WhileStatement);
    Ok(())
}

pub fn parse_procedure_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::ProcedureStatement);
    parser.accept_terminal(TokenKind::Call)?;
    parser.accept_terminal(TokenKind::Identifier)?;
    parser.accept_terminal(TokenKind::OpenParen)?;
    parse_argument_list(parser)?;
    parser.accept_terminal(TokenKind::CloseParen)?;
    parser.finish(Nonterminal::ProcedureStatement);
    Ok(())
}

pub fn parse_until_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::UntilStatement);
    parser.accept_terminal(TokenKind::Do)?;
    parse_statement_list(parser)?;
    parser.accept_terminal(TokenKind::Until)?;
    parse_condition(parser)?;
    parser.finish(Nonterminal::UntilStatement);
    Ok(())
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::ForStatement);
    parser.accept_terminal(TokenKind::For)?;
    parser.accept_terminal(TokenKind::OpenParen)?;
    parse_assignment_stmt(parser)?;
    parser.accept_terminal(TokenKind::Semicolon)?;
    parse_condition(parser)?;
    parser.accept_terminal(TokenKind::Semicolon)?;
    parse_assignment_stmt(parser)?;
    parser.accept_terminal(TokenKind::CloseParen)?;
    parser.accept_terminal(TokenKind::Do)?;
    parse_statement_list(parser)?;
    parser.accept_terminal(TokenKind::End)?;
    parser.accept_terminal(TokenKind::Loop)?;
    parser.finish(Nonterminal::ForStatement);
    Ok(())
}

/// `ArgumentList ::= identifier ( , identifier )*`
pub fn parse_argument_list(parser: &mut Parser) -> Result<(), Error> {
    parser.commence(Nonterminal::ArgumentList);
    parse_argument(parser)?;
    parser.repeat(&[TokenKind::Comma], parse_argument, parse_argument_list)?;
    parser.finish(Nonterminal::ArgumentList);
    Ok(())
}

fn parse_argument(parser: &mut Parser) -> Result<(), Error> {
    parser.accept_terminal(TokenKind::Identifier)
}
