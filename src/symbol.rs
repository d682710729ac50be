use crate::grammar::GrammarError;
use crate::lexer::Token;
use crate::value::Val;

use regex::Regex;
use std::sync::Arc;

/// One position of a rule's right-hand side.
///
/// `Rule` is the only non-terminal; the remaining four variants are the ways
/// a terminal can recognize a token. Asking a symbol the "wrong" question
/// (`matches_token` on a `Rule`, `matches_rule` on a terminal) answers
/// `false` rather than failing, so the chart can test symbols uniformly.
#[derive(Clone, Debug)]
pub enum Symbol {
    /// Satisfied by a completed rule with this name.
    Rule(String),
    /// Satisfied by a token whose declared kind is this name.
    Token(String),
    /// Satisfied by a token whose value is exactly this string.
    Literal(String),
    /// Satisfied by a token whose text matches this pattern.
    Charset(Regex),
    Tester(Tester),
}

pub type Predicate = Arc<dyn Fn(&Val, &Token) -> bool + Send + Sync>;

/// An arbitrary token predicate; `label` stands in for the predicate in
/// debug output and predictions.
#[derive(Clone)]
pub struct Tester {
    pub(crate) label: String,
    predicate: Predicate,
}

impl Tester {
    pub fn new(label: impl Into<String>, predicate: impl Fn(&Val, &Token) -> bool + Send + Sync + 'static) -> Self {
        Tester { label: label.into(), predicate: Arc::new(predicate) }
    }

    pub fn test(&self, value: &Val, token: &Token) -> bool {
        (self.predicate)(value, token)
    }
}

impl std::fmt::Debug for Tester {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "tester[{}]", self.label)
    }
}

impl Symbol {
    pub fn rule(name: impl Into<String>) -> Self { Symbol::Rule(name.into()) }
    pub fn token(kind: impl Into<String>) -> Self { Symbol::Token(kind.into()) }
    pub fn literal(value: impl Into<String>) -> Self { Symbol::Literal(value.into()) }

    pub fn charset(pattern: &str) -> Result<Self, GrammarError> {
        Ok(Symbol::Charset(Regex::new(pattern)?))
    }

    pub fn tester(label: impl Into<String>, predicate: impl Fn(&Val, &Token) -> bool + Send + Sync + 'static) -> Self {
        Symbol::Tester(Tester::new(label, predicate))
    }

    pub fn matches_token(&self, value: &Val, token: &Token) -> bool {
        match self {
            Symbol::Rule(_) => false,
            Symbol::Token(kind) => token.kind.as_deref() == Some(kind.as_str()),
            Symbol::Literal(lit) => value.as_str() == Some(lit.as_str()),
            Symbol::Charset(pattern) => pattern.is_match(&token.text),
            Symbol::Tester(tester) => tester.test(value, token),
        }
    }

    pub fn matches_rule(&self, name: &str) -> bool {
        match self {
            Symbol::Rule(n) => n == name,
            Symbol::Token(_) |
            Symbol::Literal(_) |
            Symbol::Charset(_) |
            Symbol::Tester(_) => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Symbol::Rule(_))
    }

    /// The human-readable form used in state dumps and predictions.
    pub fn debug(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for Symbol {
    /// Bare strings name rules, the way grammar sources refer to them.
    fn from(name: &str) -> Symbol { Symbol::rule(name) }
}

#[cfg(test)]
#[path = "tests/symbol.rs"]
mod tests_for_symbol;
