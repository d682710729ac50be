use crate::chart::{ParseChart, Scanned};
use crate::grammar::Grammar;
use crate::lexer::{CharLexer, Lexer, LexerError};
use crate::value::Val;

use derive_more::Display;
use std::sync::Arc;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum FailureType {
    /// Valid so far; more input could still complete a parse.
    #[display(fmt = "incomplete")]
    Incomplete,
    /// Some token could not continue any derivation.
    #[display(fmt = "invalid")]
    Invalid,
    /// The lexer rejected the input before parsing began.
    #[display(fmt = "lexer")]
    Lexer,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ParseOutcome {
    Success {
        ambiguous: bool,
        /// The result of the first success state found.
        result: Val,
        additional_results: Vec<Val>,
    },
    Incomplete { predictions: Vec<String> },
    Invalid,
    Lexer(LexerError),
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, ParseOutcome::Success { ambiguous: true, .. })
    }

    pub fn failure_type(&self) -> Option<FailureType> {
        match self {
            ParseOutcome::Success { .. } => None,
            ParseOutcome::Incomplete { .. } => Some(FailureType::Incomplete),
            ParseOutcome::Invalid => Some(FailureType::Invalid),
            ParseOutcome::Lexer(_) => Some(FailureType::Lexer),
        }
    }

    pub fn result(&self) -> Option<&Val> {
        if let ParseOutcome::Success { result, .. } = self { Some(result) } else { None }
    }
}

/// Drives a grammar over the tokens of a lexer.
///
/// A parser keeps nothing between calls beyond its grammar and lexer: every
/// `parse` builds and discards its own chart. The grammar is shared behind an
/// `Arc`, so parsers on several threads can use one grammar at once.
pub struct Parser<L = CharLexer> {
    grammar: Arc<Grammar>,
    lexer: L,
}

impl Parser<CharLexer> {
    /// A parser that feeds the grammar one character at a time.
    pub fn new(grammar: impl Into<Arc<Grammar>>) -> Self {
        Self::with_lexer(grammar, CharLexer::new())
    }
}

impl<L: Lexer> Parser<L> {
    pub fn with_lexer(grammar: impl Into<Arc<Grammar>>, lexer: L) -> Self {
        Parser { grammar: grammar.into(), lexer }
    }

    pub fn grammar(&self) -> &Grammar { &self.grammar }

    pub fn parse(&mut self, input: &L::Input) -> ParseOutcome {
        self.lexer.reset(input);
        let tokens = match self.lexer.drain() {
            Ok(tokens) => tokens,
            Err(err) => {
                log::debug!("lexer failed: {}", err);
                return ParseOutcome::Lexer(err);
            }
        };
        let scanned: Vec<Scanned> = tokens
            .into_iter()
            .map(|token| {
                let value = self.lexer.scan_value(&token);
                Scanned { token, value }
            })
            .collect();

        let mut chart = ParseChart::new(&self.grammar);
        let outcome = run(&mut chart, &scanned);
        log::trace!("chart after {} tokens:\n{}", scanned.len(), chart);
        log::debug!("parse finished: {:?}", outcome.failure_type());
        outcome
    }
}

/// One position per token plus a final one with no token, so that rules
/// ending exactly at end of input get completed.
fn run(chart: &mut ParseChart, scanned: &[Scanned]) -> ParseOutcome {
    for index in 0..=scanned.len() {
        if chart.table(index).is_empty() {
            log::debug!("no live states at position {}", index);
            return ParseOutcome::Invalid;
        }
        chart.process(index, scanned.get(index));
    }

    let mut results = chart
        .success_states()
        .into_iter()
        .map(|id| chart.state(id).result().clone());
    match results.next() {
        Some(result) => {
            let additional_results: Vec<Val> = results.collect();
            ParseOutcome::Success {
                ambiguous: !additional_results.is_empty(),
                result,
                additional_results,
            }
        }
        None => ParseOutcome::Incomplete { predictions: chart.predictions() },
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests_for_parser;
