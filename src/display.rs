use crate::chart::{ParseChart, Table};
use crate::grammar::Grammar;
use crate::lexer::Token;
use crate::state::State;
use crate::symbol::Symbol;
use crate::value::Val;

impl std::fmt::Display for Symbol {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Symbol::Rule(name) => write!(w, "{}", name),
            Symbol::Token(kind) => write!(w, "%{}", kind),
            Symbol::Literal(lit) => write!(w, "{}", lit),
            Symbol::Charset(pattern) => write!(w, "/{}/", pattern.as_str()),
            Symbol::Tester(tester) => write!(w, "{}", tester.label),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Null => write!(w, "null"),
            Val::Bool(b) => write!(w, "{:?}", b),
            Val::Int(i) => write!(w, "{:?}", i),
            Val::Float(f) => write!(w, "{:?}", f),
            Val::Str(s) => write!(w, "{:?}", s),
            Val::List(items) => {
                write!(w, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(w, ", ")?; }
                    write!(w, "{}", item)?;
                }
                write!(w, "]")
            }
            Val::Token(tok) => write!(w, "{}", tok),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.kind {
            Some(kind) => write!(w, "%{}({:?})", kind, self.text),
            None => write!(w, "{:?}", self.text),
        }
    }
}

/// A state paired with the grammar it needs to name its rule and symbols;
/// renders as `name → a • b (start)`.
pub struct Dotted<'a> {
    pub(crate) grammar: &'a Grammar,
    pub(crate) state: &'a State,
}

impl<'a> Dotted<'a> {
    pub fn new(grammar: &'a Grammar, state: &'a State) -> Self {
        Dotted { grammar, state }
    }
}

impl std::fmt::Display for Dotted<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rule = self.grammar.rule(self.state.rule());
        write!(w, "{} →", rule.name())?;
        for (i, sym) in rule.symbols().iter().enumerate() {
            if i == self.state.dot() { write!(w, " •")?; }
            write!(w, " {}", sym)?;
        }
        if self.state.dot() == rule.symbols().len() { write!(w, " •")?; }
        write!(w, " ({})", self.state.start())
    }
}

impl ParseChart<'_> {
    fn fmt_table(&self, table: &Table, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for &id in table.state_ids() {
            writeln!(w, "{}", Dotted::new(self.grammar(), self.state(id)))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ParseChart<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, table) in self.tables().iter().enumerate() {
            writeln!(w, "Table {}:", i)?;
            self.fmt_table(table, w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}
