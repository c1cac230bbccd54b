use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    parser::{nonterminal::Nonterminal, sink::EventSink},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Node {
        nonterminal: Nonterminal,
        children: Vec<ParseTree>,
    },
    Leaf(Token),
}

impl ParseTree {
    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node { children, .. } => children,
            ParseTree::Leaf(_) => &[],
        }
    }

    pub fn nonterminal(&self) -> Option<Nonterminal> {
        match self {
            ParseTree::Node { nonterminal, .. } => Some(*nonterminal),
            ParseTree::Leaf(_) => None,
        }
    }

    /// Number of nodes for `nonterminal` in this tree, including the root.
    pub fn count(&self, nonterminal: Nonterminal) -> usize {
        let own = usize::from(self.nonterminal() == Some(nonterminal));
        own + self
            .children()
            .iter()
            .map(|child| child.count(nonterminal))
            .sum::<usize>()
    }

    /// Longest root-to-leaf path, counting the root as 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ParseTree::depth)
            .max()
            .unwrap_or(0)
    }

    /// The leaves, left to right.
    pub fn terminals(&self) -> Vec<&Token> {
        match self {
            ParseTree::Leaf(token) => vec![token],
            ParseTree::Node { children, .. } => {
                children.iter().flat_map(ParseTree::terminals).collect()
            }
        }
    }

    fn render(&self, depth: usize, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            ParseTree::Leaf(token) => writeln!(f, "{}{}", indent, token),
            ParseTree::Node {
                nonterminal,
                children,
            } => {
                writeln!(f, "{}{}", indent, nonterminal)?;
                for child in children {
                    child.render(depth + 1, f)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(0, f)
    }
}

/// An [`EventSink`] that builds a [`ParseTree`] from a stack of open nodes.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<(Nonterminal, Vec<ParseTree>)>,
    root: Option<ParseTree>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder::default()
    }

    /// Returns the tree once every commenced nonterminal has finished.
    pub fn finish(self) -> Option<ParseTree> {
        if self.open.is_empty() {
            self.root
        } else {
            None
        }
    }

    /// Nonterminals entered but not yet finished, outermost first.
    pub fn open_nonterminals(&self) -> Vec<Nonterminal> {
        self.open.iter().map(|(nonterminal, _)| *nonterminal).collect()
    }
}

impl EventSink for TreeBuilder {
    fn commence_nonterminal(&mut self, nonterminal: Nonterminal) {
        self.open.push((nonterminal, Vec::new()));
    }

    fn finish_nonterminal(&mut self, nonterminal: Nonterminal) {
        let Some((open, children)) = self.open.pop() else {
            debug!(%nonterminal, "finish without matching commence");
            return;
        };
        debug_assert_eq!(open, nonterminal);

        let node = ParseTree::Node {
            nonterminal: open,
            children,
        };

        match self.open.last_mut() {
            Some((_, siblings)) => siblings.push(node),
            None => self.root = Some(node),
        }
    }

    fn insert_terminal(&mut self, token: &Token) {
        match self.open.last_mut() {
            Some((_, children)) => children.push(ParseTree::Leaf(token.clone())),
            // The closing end of file follows the outermost rule.
            None if token.kind == TokenKind::EOF => {}
            None => trace!(%token, "terminal outside any nonterminal"),
        }
    }

    fn report_error(&mut self, token: &Token, message: &str) -> Error {
        debug!(open = ?self.open_nonterminals(), "abandoning tree");
        Error::syntax(token, message.to_string())
    }
}
