//! Semantic values produced by scans and postprocessors.
//!
//! The parser itself never inspects these beyond equality (for literal
//! symbols) and the textual form (for the `joiner` builtin); they are the
//! currency passed between a rule's children and its postprocess combinator.

use crate::lexer::Token;

#[derive(PartialEq, Clone, Debug)]
pub enum Val {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Val>),
    Token(Box<Token>),
}

impl Val {
    pub fn empty_list() -> Self { Val::List(vec![]) }

    pub fn as_list(&self) -> Option<&[Val]> {
        if let Val::List(v) = self { Some(v) } else { None }
    }

    pub fn into_list(self) -> Option<Vec<Val>> {
        if let Val::List(v) = self { Some(v) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Val::Str(s) = self { Some(s) } else { None }
    }

    /// The textual form of a value, as a lexer would report it in a token's
    /// `text`. Lists contribute the concatenation of their elements.
    pub fn text(&self) -> String {
        match self {
            Val::Null => String::new(),
            Val::Bool(b) => b.to_string(),
            Val::Int(i) => i.to_string(),
            Val::Float(f) => f.to_string(),
            Val::Str(s) => s.clone(),
            Val::List(v) => v.iter().map(|x| x.text()).collect(),
            Val::Token(t) => t.text.clone(),
        }
    }
}

impl From<bool> for Val { fn from(b: bool) -> Val { Val::Bool(b) } }
impl From<()> for Val { fn from((): ()) -> Val { Val::Null } }
impl From<i64> for Val { fn from(n: i64) -> Val { Val::Int(n) } }
impl From<f64> for Val { fn from(n: f64) -> Val { Val::Float(n) } }
impl From<char> for Val { fn from(c: char) -> Val { Val::Str(c.to_string()) } }
impl From<String> for Val { fn from(s: String) -> Val { Val::Str(s) } }
impl From<&str> for Val { fn from(s: &str) -> Val { Val::Str(s.to_string()) } }
impl From<Token> for Val { fn from(t: Token) -> Val { Val::Token(Box::new(t)) } }
impl<T: Into<Val>> From<Vec<T>> for Val {
    fn from(v: Vec<T>) -> Val { Val::List(v.into_iter().map(Into::into).collect()) }
}
