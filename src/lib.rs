//! An Earley chart parser over pluggable token sources.
//!
//! A [`Grammar`] is an ordered list of [`Rule`]s, each a name, a sequence of
//! [`Symbol`]s and a [`Postprocess`] combinator. A [`Parser`] resets a
//! [`Lexer`] with some input, runs the chart over the resulting tokens and
//! reports a [`ParseOutcome`]: the semantic value(s) of the derivation(s)
//! from the root rule, or why there were none.
//!
//! Semantic values are assembled without building a parse tree: every state
//! links back to the state it was advanced from, and a state that completes
//! its rule walks that chain once to hand its children's results to the
//! rule's postprocess.

pub mod chart;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod regex_lexer;
pub mod state;
pub mod symbol;
pub mod value;

mod display;

pub use chart::{ParseChart, Table};
pub use display::Dotted;
pub use grammar::{Grammar, GrammarError, Postprocess, Rule, RuleId};
pub use lexer::{CharLexer, Lexer, LexerError, StreamLexer, Token};
pub use parser::{FailureType, ParseOutcome, Parser};
pub use regex_lexer::RegexLexer;
pub use state::{State, StateId, StateKey};
pub use symbol::{Symbol, Tester};
pub use value::Val;
