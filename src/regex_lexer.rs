//! A tokenizer driven by an ordered list of named patterns.
//!
//! At each position every pattern is tried, anchored at the cursor; the
//! longest match wins and ties go to the earlier rule. Kinds registered with
//! `skip` (typically whitespace) are consumed silently. If nothing matches,
//! lexing stops with a `LexerError` naming the line and column.
//!
//! Unlike the stream lexers, tokens carry a `kind`, so grammars can use
//! `%kind` symbols against them, and scans bind the whole token.

use crate::lexer::{Lexer, LexerError, Token};

use regex::Regex;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct RegexLexer {
    rules: Vec<(String, Regex)>,
    skip: HashSet<String>,
    input: String,
    cursor: usize,
}

impl RegexLexer {
    pub fn new<'a>(rules: impl IntoIterator<Item=(&'a str, &'a str)>) -> Result<Self, regex::Error> {
        let rules = rules
            .into_iter()
            .map(|(kind, pattern)| Ok((kind.to_string(), Regex::new(&format!(r"\A(?:{})", pattern))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(RegexLexer { rules, skip: HashSet::new(), input: String::new(), cursor: 0 })
    }

    /// Drop tokens of `kind` instead of emitting them.
    pub fn skip(mut self, kind: impl Into<String>) -> Self {
        self.skip.insert(kind.into());
        self
    }

    fn longest_match(&self, rest: &str) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (kind, re) in &self.rules {
            if let Some(m) = re.find(rest) {
                // an empty match would never advance the cursor
                if m.end() == 0 { continue; }
                if best.map_or(true, |(_, len)| m.end() > len) {
                    best = Some((kind.as_str(), m.end()));
                }
            }
        }
        best
    }

    fn error_at(&self, offset: usize) -> LexerError {
        let before = &self.input[..offset];
        let line = before.matches('\n').count() + 1;
        let col = before.rfind('\n').map_or(before.chars().count(), |nl| before[nl + 1..].chars().count()) + 1;
        let found: String = self.input[offset..].chars().take(10).collect();
        LexerError::new(format!("invalid syntax at line {} col {}: {:?}", line, col, found), offset)
    }
}

impl Lexer for RegexLexer {
    type Input = str;

    fn reset(&mut self, input: &str) {
        self.input = input.to_string();
        self.cursor = 0;
    }

    fn next_token(&mut self) -> Option<Result<Token, LexerError>> {
        loop {
            if self.cursor >= self.input.len() {
                return None;
            }
            let offset = self.cursor;
            let rest = &self.input[offset..];
            let (kind, len) = match self.longest_match(rest) {
                Some((kind, len)) => (kind.to_string(), len),
                None => {
                    let err = self.error_at(offset);
                    // a failed lexer stays failed until it is reset
                    self.cursor = self.input.len();
                    return Some(Err(err));
                }
            };
            self.cursor += len;
            if self.skip.contains(&kind) {
                continue;
            }
            let text = &self.input[offset..offset + len];
            return Some(Ok(Token::typed(kind, text, offset)));
        }
    }
}

#[cfg(test)]
#[path = "tests/regex_lexer.rs"]
mod tests_for_regex_lexer;
