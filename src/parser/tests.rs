//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The event trace of each statement form
//! - Repetitions in flat and nested shape
//! - Syntax error messages and where they are raised
//! - Strict and lenient handling of unmatched alternatives
//! - Token source failures

use std::rc::Rc;

use super::{
    nonterminal::Nonterminal,
    parser::{parse, Parser, ParserOptions, RepetitionShape},
    sink::{Event, TraceSink},
    stmt::parse_argument_list,
};
use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

const NESTED: ParserOptions = ParserOptions {
    repetition: RepetitionShape::Nested,
    strict_alternatives: true,
};

const LENIENT: ParserOptions = ParserOptions {
    repetition: RepetitionShape::Flat,
    strict_alternatives: false,
};

fn run(source: &str, options: ParserOptions) -> (TraceSink, Result<(), Error>) {
    let tokens = tokenize(source.to_string(), Some("test.txt".to_string())).unwrap();
    let mut stream = TokenStream::new(tokens);
    let mut sink = TraceSink::new();
    let result = parse(&mut stream, &mut sink, options);
    (sink, result)
}

fn parse_ok(source: &str) -> TraceSink {
    let (sink, result) = run(source, ParserOptions::default());
    assert!(result.is_ok(), "{:?}", result.err().map(|e| e.to_string()));
    sink
}

fn parse_err(source: &str) -> (TraceSink, Error) {
    let (sink, result) = run(source, ParserOptions::default());
    (sink, result.expect_err("expected a syntax error"))
}

/// `+Rule` / `-Rule` for rule boundaries, the symbol name for terminals.
fn shape(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| match event {
            Event::Commence(nonterminal) => format!("+{}", nonterminal),
            Event::Finish(nonterminal) => format!("-{}", nonterminal),
            Event::Terminal(token) => token.kind.name().to_string(),
        })
        .collect()
}

fn token(kind: TokenKind, value: &str, line: u32) -> Token {
    Token {
        kind,
        value: value.to_string(),
        position: Position(line, Rc::new("tokens".to_string())),
    }
}

struct FailingSource {
    tokens: Vec<Token>,
}

impl TokenSource for FailingSource {
    fn next_token(&mut self) -> Result<Token, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(
                ErrorImpl::Io {
                    reason: "disk on fire".to_string(),
                },
                Position(9, Rc::new("tokens".to_string())),
            ));
        }
        Ok(self.tokens.remove(0))
    }
}

#[test]
fn test_single_assignment_trace() {
    let sink = parse_ok("begin x := 1 end");

    assert_eq!(
        shape(sink.events()),
        vec![
            "+StatementPart",
            "begin",
            "+StatementList",
            "+Statement",
            "+AssignmentStatement",
            "identifier",
            ":=",
            "+Expression",
            "+Term",
            "+Factor",
            "numberConstant",
            "-Factor",
            "-Term",
            "-Expression",
            "-AssignmentStatement",
            "-Statement",
            "-StatementList",
            "end",
            "-StatementPart",
            "end of file",
        ]
    );
    assert!(sink.error().is_none());
}

#[test]
fn test_mismatch_reports_expected_symbol_and_line() {
    let (sink, error) = parse_err("begin\n  x := y\n  loop");

    assert!(error.is_syntax_error());
    assert_eq!(error.get_position().line(), 3);
    assert_eq!(error.get_token().unwrap().kind, TokenKind::Loop);
    assert_eq!(
        error.to_string(),
        "[File: test.txt - Line 3] - Expected: 'end' but got: 'loop'"
    );
    assert_eq!(sink.error(), Some(error.to_string().as_str()));
    assert!(sink
        .terminals()
        .iter()
        .all(|token| token.kind != TokenKind::Loop));
}

#[test]
fn test_argument_list_is_one_nonterminal() {
    let sink = parse_ok("begin call p(a, b, c) end");

    assert_eq!(sink.commenced(Nonterminal::ArgumentList), 1);
    assert_eq!(sink.finished(Nonterminal::ArgumentList), 1);

    let start = sink
        .events()
        .iter()
        .position(|event| *event == Event::Commence(Nonterminal::ArgumentList))
        .unwrap();
    let end = sink
        .events()
        .iter()
        .position(|event| *event == Event::Finish(Nonterminal::ArgumentList))
        .unwrap();
    assert_eq!(
        shape(&sink.events()[start + 1..end]),
        vec!["identifier", ",", "identifier", ",", "identifier"]
    );
}

#[test]
fn test_argument_list_directly() {
    let mut stream = TokenStream::new(vec![
        token(TokenKind::Identifier, "a", 1),
        token(TokenKind::Comma, ",", 1),
        token(TokenKind::Identifier, "b", 1),
        token(TokenKind::Comma, ",", 1),
        token(TokenKind::Identifier, "c", 1),
        token(TokenKind::CloseParen, ")", 1),
    ]);
    let mut sink = TraceSink::new();
    let mut parser = Parser::new(&mut stream, &mut sink, ParserOptions::default()).unwrap();

    parse_argument_list(&mut parser).unwrap();
    assert_eq!(parser.current_token_kind(), TokenKind::CloseParen);

    assert_eq!(sink.commenced(Nonterminal::ArgumentList), 1);
    assert_eq!(sink.terminals().len(), 5);
}

#[test]
fn test_statement_list_without_trailing_semicolon() {
    let sink = parse_ok("begin x := 1 end");

    assert_eq!(sink.commenced(Nonterminal::StatementList), 1);
    assert_eq!(sink.commenced(Nonterminal::Statement), 1);
}

#[test]
fn test_trailing_semicolon_is_an_error() {
    let (sink, error) = parse_err("begin x := 1;\nend");

    assert_eq!(error.get_position().line(), 2);
    assert_eq!(
        error.to_string(),
        "[File: test.txt - Line 2] - Expected: one of 'identifier', 'if', 'while', 'call', 'do', 'for' but got: 'end'"
    );
    assert_eq!(sink.terminals().last().unwrap().kind, TokenKind::Semicolon);
}

#[test]
fn test_repetition_brackets_once_for_any_count() {
    for n in 1..=6 {
        let statements = (0..n)
            .map(|i| format!("v{} := {}", i, i))
            .collect::<Vec<_>>()
            .join("; ");
        let sink = parse_ok(&format!("begin {} end", statements));

        assert_eq!(sink.commenced(Nonterminal::StatementList), 1);
        assert_eq!(sink.finished(Nonterminal::StatementList), 1);
        assert_eq!(sink.commenced(Nonterminal::Statement), n);
        let semicolons = sink
            .terminals()
            .iter()
            .filter(|token| token.kind == TokenKind::Semicolon)
            .count();
        assert_eq!(semicolons, n - 1);
    }
}

#[test]
fn test_expression_and_term_repetitions_are_flat() {
    let sink = parse_ok("begin x := a + b - c * d / e % f end");

    assert_eq!(sink.commenced(Nonterminal::Expression), 1);
    assert_eq!(sink.commenced(Nonterminal::Term), 3);
    assert_eq!(sink.commenced(Nonterminal::Factor), 6);
}

#[test]
fn test_nested_repetitions() {
    let (sink, result) = run("begin a := 1; b := 2; c := 3 - 4 - 5 end", NESTED);

    assert!(result.is_ok());
    assert_eq!(sink.commenced(Nonterminal::StatementList), 3);
    assert_eq!(sink.commenced(Nonterminal::Statement), 3);
    assert_eq!(sink.commenced(Nonterminal::Expression), 5);

    // The second StatementList opens inside the first.
    let shape = shape(sink.events());
    let lists: Vec<usize> = shape
        .iter()
        .enumerate()
        .filter(|(_, event)| event.as_str() == "+StatementList")
        .map(|(index, _)| index)
        .collect();
    let first_close = shape.iter().position(|event| event == "-StatementList").unwrap();
    assert!(lists[2] < first_close);
}

#[test]
fn test_nested_argument_list() {
    let (sink, result) = run("begin call p(a, b, c) end", NESTED);

    assert!(result.is_ok());
    assert_eq!(sink.commenced(Nonterminal::ArgumentList), 3);
    assert_eq!(sink.finished(Nonterminal::ArgumentList), 3);
}

#[test]
fn test_shapes_accept_the_same_terminals() {
    let source = "begin a := (1 + b) * 2; call p(a, b); do x := x - 1 until x <= 0 end";
    let (flat, flat_result) = run(source, ParserOptions::default());
    let (nested, nested_result) = run(source, NESTED);

    assert!(flat_result.is_ok() && nested_result.is_ok());
    assert_eq!(flat.terminals(), nested.terminals());
    assert_ne!(flat.events().len(), nested.events().len());
}

#[test]
fn test_parsing_is_deterministic() {
    let source = "begin if a > 1 then b := 2 else call q(b) end if; while a != b loop a := a + 1 end loop end";

    assert_eq!(parse_ok(source).into_events(), parse_ok(source).into_events());
}

#[test]
fn test_accepted_terminals_reconstruct_input() {
    let source = "begin\n for (i := 0; i < 10; i := i + 1) do\n  s := \"x\";\n  call print(s, i)\n end loop\nend";
    let tokens = tokenize(source.to_string(), Some("test.txt".to_string())).unwrap();
    let sink = parse_ok(source);

    let accepted: Vec<Token> = sink.terminals().into_iter().cloned().collect();
    assert_eq!(accepted, tokens);
}

#[test]
fn test_no_terminal_accepted_after_mismatch() {
    let source = "begin x := 1; while x < 3 loop x := x + 1 end if end";
    let tokens = tokenize(source.to_string(), Some("test.txt".to_string())).unwrap();
    let (sink, error) = parse_err(source);

    // `end if` is where `end loop` was required.
    let k = tokens
        .iter()
        .position(|token| token.kind == TokenKind::If)
        .unwrap();
    assert_eq!(error.get_token(), Some(&tokens[k]));
    assert_eq!(sink.terminals().len(), k);
    assert!(error.to_string().contains("Expected: 'loop' but got: 'if'"));
}

#[test]
fn test_each_statement_form() {
    let sink = parse_ok(
        "begin
            a := \"text\";
            b := (a + 2) * 3;
            if a = b then c := 1 end if;
            if a >= 1 then c := 1 else c := 2; d := 3 end if;
            while a < 10 loop a := a + 1 end loop;
            call print(a, b, c);
            do a := a - 1 until a <= 0;
            for (i := 1; i != 10; i := i + 1) do s := s + i end loop
        end",
    );

    for nonterminal in [
        Nonterminal::IfStatement,
        Nonterminal::WhileStatement,
        Nonterminal::ProcedureStatement,
        Nonterminal::UntilStatement,
        Nonterminal::ForStatement,
    ] {
        assert!(sink.commenced(nonterminal) >= 1, "{} not seen", nonterminal);
        assert_eq!(sink.commenced(nonterminal), sink.finished(nonterminal));
    }
    assert_eq!(sink.commenced(Nonterminal::IfStatement), 2);
    assert_eq!(sink.commenced(Nonterminal::AssignmentStatement), 11);
}

#[test]
fn test_string_assignment_skips_expression() {
    let sink = parse_ok("begin x := \"hello\" end");

    assert_eq!(sink.commenced(Nonterminal::Expression), 0);
    assert!(sink
        .terminals()
        .iter()
        .any(|token| token.kind == TokenKind::StringConstant && token.value == "hello"));
}

#[test]
fn test_condition_operands_and_operators() {
    for operator in [">", ">=", "=", "!=", "<", "<="] {
        for operand in ["y", "10", "\"abc\""] {
            let source = format!("begin while x {} {} loop x := 1 end loop end", operator, operand);
            let sink = parse_ok(&source);
            assert_eq!(sink.commenced(Nonterminal::ConditionalOperator), 1);
        }
    }
}

#[test]
fn test_condition_rejects_expression_operand() {
    let (_, error) = parse_err("begin while x < (y) loop x := 1 end loop end");

    assert!(error
        .to_string()
        .contains("Expected: one of 'identifier', 'numberConstant', 'stringConstant' but got: '('"));
}

#[test]
fn test_missing_conditional_operator() {
    let (_, error) = parse_err("begin if x then y := 1 end if end");

    assert!(error.to_string().contains("Expected: one of '>', '>=', '=', '!=', '<', '<='"));
}

#[test]
fn test_unbalanced_parenthesis() {
    let (_, error) = parse_err("begin x := (a + (b * 2) end");

    assert!(error.to_string().contains("Expected: ')' but got: 'end'"));
}

#[test]
fn test_missing_factor() {
    let (_, error) = parse_err("begin x := a + end");

    assert!(error
        .to_string()
        .contains("Expected: one of 'identifier', 'numberConstant', '(' but got: 'end'"));
}

#[test]
fn test_trailing_tokens_after_program() {
    let (_, error) = parse_err("begin x := 1 end x");

    assert!(error
        .to_string()
        .contains("Expected: 'end of file' but got: identifier 'x'"));
}

#[test]
fn test_missing_begin() {
    let (sink, error) = parse_err("x := 1");

    assert!(error.to_string().contains("Expected: 'begin' but got: identifier 'x'"));
    assert!(sink.terminals().is_empty());
    assert_eq!(sink.commenced(Nonterminal::StatementPart), 1);
    assert_eq!(sink.finished(Nonterminal::StatementPart), 0);
}

#[test]
fn test_lenient_allows_empty_statement() {
    let (sink, result) = run("begin x := 1; end", LENIENT);

    assert!(result.is_ok());
    assert_eq!(sink.commenced(Nonterminal::Statement), 2);
    assert_eq!(sink.commenced(Nonterminal::AssignmentStatement), 1);
}

#[test]
fn test_lenient_defers_error_to_next_terminal() {
    let (_, result) = run("begin loop end", LENIENT);
    let error = result.unwrap_err();

    assert!(error.to_string().ends_with("Expected: 'end' but got: 'loop'"));

    let (_, result) = run("begin loop end", ParserOptions::default());
    let error = result.unwrap_err();

    assert!(error.to_string().contains("Expected: one of 'identifier'"));
}

#[test]
fn test_token_source_failure_propagates() {
    let mut source = FailingSource {
        tokens: vec![
            token(TokenKind::Begin, "begin", 1),
            token(TokenKind::Identifier, "x", 1),
        ],
    };
    let mut sink = TraceSink::new();
    let error = parse(&mut source, &mut sink, ParserOptions::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "IoError");
    assert!(sink.error().is_none());
    assert_eq!(sink.terminals().len(), 2);
}

#[test]
fn test_parser_primes_lookahead() {
    let mut source = FailingSource { tokens: vec![] };
    let mut sink = TraceSink::new();

    assert!(Parser::new(&mut source, &mut sink, ParserOptions::default()).is_err());

    let mut stream = TokenStream::new(vec![token(TokenKind::Begin, "begin", 4)]);
    let parser = Parser::new(&mut stream, &mut sink, ParserOptions::default()).unwrap();
    assert_eq!(parser.current_token_kind(), TokenKind::Begin);
    assert_eq!(parser.current_token().line(), 4);
}

#[test]
fn test_hand_built_tokens_name_their_input() {
    let mut stream = TokenStream::new(vec![
        token(TokenKind::Begin, "begin", 1),
        token(TokenKind::Identifier, "x", 2),
        token(TokenKind::Becomes, ":=", 2),
        token(TokenKind::Identifier, "y", 2),
        token(TokenKind::Loop, "loop", 3),
    ]);
    let mut sink = TraceSink::new();
    let error = parse(&mut stream, &mut sink, ParserOptions::default()).unwrap_err();

    assert_eq!(
        error.to_string(),
        "[File: tokens - Line 3] - Expected: 'end' but got: 'loop'"
    );
}
