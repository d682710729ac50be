//! The token-source contract the parser is written against, plus the two
//! stream lexers that are used when no other lexer is supplied.
//!
//! A lexer is a finite, forward-only, restartable producer of tokens. The
//! parser resets it with fresh input, drains it once, and never rewinds or
//! looks past the current token.

use crate::value::Val;
use derive_more::AsRef;
use thiserror::Error;

#[derive(PartialEq, Clone, Debug, AsRef)]
pub struct Token {
    /// The declared type of the token, matched by `%kind` symbols. Stream
    /// lexers leave this unset.
    pub kind: Option<String>,
    pub value: Val,
    #[as_ref]
    pub text: String,
    /// Position of the token in its input: a byte offset for text lexers,
    /// an element index for stream lexers.
    pub offset: usize,
}

impl Token {
    pub fn untyped(value: Val, offset: usize) -> Self {
        let text = value.text();
        Token { kind: None, value, text, offset }
    }

    pub fn typed(kind: impl Into<String>, text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        Token { kind: Some(kind.into()), value: Val::Str(text.clone()), text, offset }
    }
}

#[derive(PartialEq, Clone, Debug, Error)]
#[error("{message} at offset {offset}")]
pub struct LexerError {
    pub message: String,
    pub offset: usize,
}

impl LexerError {
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        LexerError { message: message.into(), offset }
    }
}

pub trait Lexer {
    type Input: ?Sized;

    /// (Re)initialize over `input`, discarding whatever was left over from
    /// a previous run.
    fn reset(&mut self, input: &Self::Input);

    /// The next token, `None` at end of input, or the error that stopped
    /// tokenization.
    fn next_token(&mut self) -> Option<Result<Token, LexerError>>;

    /// The value a scan binds into the advanced state's result. Lexers that
    /// carry type/text metadata hand over the whole token.
    fn scan_value(&self, token: &Token) -> Val {
        Val::Token(Box::new(token.clone()))
    }

    /// Drain every remaining token, stopping at the first error.
    fn drain(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token() {
            tokens.push(tok?);
        }
        Ok(tokens)
    }
}

/// Emits one untyped token per input element.
#[derive(Default, Debug)]
pub struct StreamLexer {
    buffer: Vec<Val>,
    index: usize,
}

impl StreamLexer {
    pub fn new() -> Self { Self::default() }
}

impl Lexer for StreamLexer {
    type Input = [Val];

    fn reset(&mut self, input: &[Val]) {
        self.buffer = input.to_vec();
        self.index = 0;
    }

    fn next_token(&mut self) -> Option<Result<Token, LexerError>> {
        let value = self.buffer.get(self.index)?.clone();
        let tok = Token::untyped(value, self.index);
        self.index += 1;
        Some(Ok(tok))
    }

    fn scan_value(&self, token: &Token) -> Val {
        token.value.clone()
    }
}

/// A `StreamLexer` over the characters of a string; each character becomes
/// a one-character string token.
#[derive(Default, Debug)]
pub struct CharLexer(StreamLexer);

impl CharLexer {
    pub fn new() -> Self { Self::default() }
}

impl Lexer for CharLexer {
    type Input = str;

    fn reset(&mut self, input: &str) {
        let chars: Vec<Val> = input.chars().map(Val::from).collect();
        self.0.reset(&chars);
    }

    fn next_token(&mut self) -> Option<Result<Token, LexerError>> {
        self.0.next_token()
    }

    fn scan_value(&self, token: &Token) -> Val {
        self.0.scan_value(token)
    }
}

#[cfg(test)]
#[path = "tests/lexer.rs"]
mod tests_for_lexer;
