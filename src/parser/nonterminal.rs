use std::fmt::Display;

/// The grammar rules the parser reports to its sink.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Nonterminal {
    StatementPart,
    StatementList,
    Statement,
    AssignmentStatement,
    IfStatement,
    WhileStatement,
    ProcedureStatement,
    UntilStatement,
    ForStatement,
    ArgumentList,
    Condition,
    ConditionalOperator,
    Expression,
    Term,
    Factor,
}

impl Nonterminal {
    pub fn name(&self) -> &'static str {
        match self {
            Nonterminal::StatementPart => "StatementPart",
            Nonterminal::StatementList => "StatementList",
            Nonterminal::Statement => "Statement",
            Nonterminal::AssignmentStatement => "AssignmentStatement",
            Nonterminal::IfStatement => "IfStatement",
            Nonterminal::WhileStatement => "WhileStatement",
            Nonterminal::ProcedureStatement => "ProcedureStatement",
            Nonterminal::UntilStatement => "UntilStatement",
            Nonterminal::ForStatement => "ForStatement",
            Nonterminal::ArgumentList => "ArgumentList",
            Nonterminal::Condition => "Condition",
            Nonterminal::ConditionalOperator => "ConditionalOperator",
            Nonterminal::Expression => "Expression",
            Nonterminal::Term => "Term",
            Nonterminal::Factor => "Factor",
        }
    }
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
