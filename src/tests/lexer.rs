// This is actually defined at `crate::lexer::tests_for_lexer`

use crate::lexer::*;
use crate::Val;

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn stream_lexer_emits_each_element() {
    let mut lex = StreamLexer::new();
    lex.reset(&[Val::Int(1), Val::from("two"), Val::Float(3.5)]);
    let tokens = lex.drain().unwrap();
    assert_eq!(texts(&tokens), vec!["1", "two", "3.5"]);
    assert_eq!(tokens[1].value, Val::from("two"));
    assert_eq!(tokens[2].offset, 2);
    assert!(tokens.iter().all(|t| t.kind.is_none()));
    assert!(lex.next_token().is_none());
}

#[test]
fn reset_restarts_from_zero() {
    let mut lex = CharLexer::new();
    lex.reset("ab");
    assert_eq!(lex.next_token().unwrap().unwrap().text, "a");
    lex.reset("xyz");
    assert_eq!(texts(&lex.drain().unwrap()), vec!["x", "y", "z"]);
    lex.reset("");
    assert!(lex.next_token().is_none());
}

#[test]
fn stream_scans_bind_the_raw_value() {
    let lex = StreamLexer::new();
    let tok = Token::untyped(Val::Int(9), 0);
    assert_eq!(lex.scan_value(&tok), Val::Int(9));
    assert_eq!(CharLexer::new().scan_value(&Token::untyped(Val::from('q'), 0)), Val::from("q"));
}

/// Only implements the required methods, so scans see the default binding.
struct Fixed(Vec<Token>);

impl Lexer for Fixed {
    type Input = ();
    fn reset(&mut self, _: &()) {}
    fn next_token(&mut self) -> Option<Result<Token, LexerError>> {
        if self.0.is_empty() { None } else { Some(Ok(self.0.remove(0))) }
    }
}

#[test]
fn default_scans_bind_the_whole_token() {
    let tok = Token::typed("word", "hi", 4);
    let lex = Fixed(vec![]);
    assert_eq!(lex.scan_value(&tok), Val::Token(Box::new(tok.clone())));
    let text: &String = tok.as_ref();
    assert_eq!(text, "hi");
}

#[test]
fn drain_stops_at_first_error() {
    struct Failing(usize);
    impl Lexer for Failing {
        type Input = ();
        fn reset(&mut self, _: &()) { self.0 = 0; }
        fn next_token(&mut self) -> Option<Result<Token, LexerError>> {
            self.0 += 1;
            match self.0 {
                1 => Some(Ok(Token::typed("a", "a", 0))),
                2 => Some(Err(LexerError::new("bad", 1))),
                _ => Some(Ok(Token::typed("b", "b", 2))),
            }
        }
    }
    let mut lex = Failing(0);
    lex.reset(&());
    let err = lex.drain().unwrap_err();
    assert_eq!(err, LexerError::new("bad", 1));
    assert_eq!(err.to_string(), "bad at offset 1");
}
