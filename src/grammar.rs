use crate::symbol::Symbol;
use crate::value::Val;

use derive_more::{Display, From};
use linear_map::LinearMap;
use std::sync::Arc;
use thiserror::Error;

// A grammar is an ordered collection of rules and a root rule name.
//   Rules sharing a name are alternatives of one non-terminal.
//   Declared order is load-bearing: it fixes the order in which predicted
//   states are appended, and hence which derivation survives deduplication
//   and which success is reported first.

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar contains no rules")]
    EmptyGrammar,
    #[error("invalid charset pattern: {0}")]
    InvalidCharset(#[from] regex::Error),
}

/// Index of a rule within its grammar; this is the rule's identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, From)]
pub struct RuleId(pub(crate) usize);

pub type Combinator = Arc<dyn Fn(Vec<Val>) -> Val + Send + Sync>;

/// How a completed rule turns its children's results into its own.
#[derive(Clone)]
pub enum Postprocess {
    /// The children, unchanged, as a list.
    Identity,
    /// The first child (the `id` shortcut).
    First,
    /// The children's text, concatenated.
    Joiner,
    /// `[d0] ++ d1`
    ArrConcat,
    /// `d0 ++ [d1]`
    ArrPush,
    Nuller,
    Custom(Combinator),
}

impl Postprocess {
    pub fn custom(f: impl Fn(Vec<Val>) -> Val + Send + Sync + 'static) -> Self {
        Postprocess::Custom(Arc::new(f))
    }

    pub fn apply(&self, children: Vec<Val>) -> Val {
        match self {
            Postprocess::Identity => Val::List(children),
            Postprocess::First => children.into_iter().next().unwrap_or(Val::Null),
            Postprocess::Joiner => Val::Str(children.iter().map(|c| c.text()).collect()),
            Postprocess::ArrConcat => {
                let mut cs = children.into_iter();
                let mut accum: Vec<Val> = cs.next().into_iter().collect();
                match cs.next() {
                    Some(Val::List(rest)) => accum.extend(rest),
                    Some(other) => accum.push(other),
                    None => {}
                }
                Val::List(accum)
            }
            Postprocess::ArrPush => {
                let mut cs = children.into_iter();
                let mut accum = match cs.next() {
                    Some(Val::List(v)) => v,
                    Some(other) => vec![other],
                    None => vec![],
                };
                accum.extend(cs.next());
                Val::List(accum)
            }
            Postprocess::Nuller => Val::Null,
            Postprocess::Custom(f) => f(children),
        }
    }
}

impl std::fmt::Debug for Postprocess {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Postprocess::Identity => write!(w, "identity"),
            Postprocess::First => write!(w, "id"),
            Postprocess::Joiner => write!(w, "joiner"),
            Postprocess::ArrConcat => write!(w, "arrconcat"),
            Postprocess::ArrPush => write!(w, "arrpush"),
            Postprocess::Nuller => write!(w, "nuller"),
            Postprocess::Custom(_) => write!(w, "custom"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub(crate) name: String,
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) postprocess: Postprocess,
}

impl Rule {
    pub fn new(name: impl Into<String>, symbols: Vec<Symbol>) -> Rule {
        Rule { name: name.into(), symbols, postprocess: Postprocess::Identity }
    }

    pub fn with_postprocess(mut self, postprocess: Postprocess) -> Rule {
        self.postprocess = postprocess;
        self
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn symbols(&self) -> &[Symbol] { &self.symbols }
    pub fn postprocess(&self) -> &Postprocess { &self.postprocess }
}

#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    root: String,
    by_name: LinearMap<String, Vec<RuleId>>,
}

impl Grammar {
    /// A grammar rooted at the first rule's name.
    pub fn new(rules: Vec<Rule>) -> Result<Self, GrammarError> {
        let root = rules.first().ok_or(GrammarError::EmptyGrammar)?.name.clone();
        Self::with_root(rules, root)
    }

    pub fn with_root(rules: Vec<Rule>, root: impl Into<String>) -> Result<Self, GrammarError> {
        if rules.is_empty() {
            return Err(GrammarError::EmptyGrammar);
        }
        let root = root.into();
        let mut by_name: LinearMap<String, Vec<RuleId>> = LinearMap::new();
        for (i, r) in rules.iter().enumerate() {
            by_name.entry(r.name.clone()).or_insert(Vec::new()).push(RuleId(i));
        }
        if !by_name.contains_key(&root) {
            log::warn!("root rule `{}` has no alternatives; every parse will be invalid", root);
        }
        Ok(Grammar { rules, root, by_name })
    }

    pub fn root_name(&self) -> &str { &self.root }

    pub fn rule(&self, id: RuleId) -> &Rule { &self.rules[id.0] }

    pub fn rules(&self) -> impl Iterator<Item=(RuleId, &Rule)> {
        self.rules.iter().enumerate().map(|(i, r)| (RuleId(i), r))
    }

    pub fn len(&self) -> usize { self.rules.len() }

    pub fn root_rules(&self) -> &[RuleId] {
        self.rules_by_name(&self.root)
    }

    /// The alternatives named `name`, in declared order.
    pub fn rules_by_name(&self, name: &str) -> &[RuleId] {
        self.by_name.get(name).map(|v| &v[..]).unwrap_or(&[])
    }

    pub fn is_root_rule(&self, id: RuleId) -> bool {
        self.rule(id).name == self.root
    }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
