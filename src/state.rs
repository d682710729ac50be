//! Earley states: dotted rules with an origin and an ancestor link.
//!
//! A state at dot `k` remembers the state at dot `k-1` it was advanced from,
//! together with the result bound by that advance. Walking the chain back to
//! dot 0 therefore recovers the results of every child of the rule, in
//! reverse; this is how a completed state builds its semantic value without
//! a parse tree ever being materialized.
//!
//! States are held in a per-parse arena (`States`) and refer to their
//! ancestor by `StateId`, so the chains can never form ownership cycles and
//! all of them are freed together when the chart is dropped.

use crate::grammar::{Grammar, Rule, RuleId};
use crate::symbol::Symbol;
use crate::value::Val;

use derive_more::{Display, From};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, From)]
pub struct StateId(pub(crate) usize);

/// The deduplication key of a state. Result and ancestor deliberately do not
/// participate: the first state inserted under a key wins.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct StateKey {
    pub rule: RuleId,
    pub dot: usize,
    pub start: usize,
}

#[derive(Clone, Debug)]
pub struct State {
    rule: RuleId,
    /// Between 0 and the rule's symbol count, inclusive.
    dot: usize,
    /// Index of the table this state started in.
    start: usize,
    ancestor: Option<StateId>,
    /// Empty list until the state completes.
    result: Val,
}

impl State {
    /// A fresh state at dot 0. Rules with no symbols are complete on
    /// creation, so their result is finalized immediately from zero
    /// children.
    pub fn new(grammar: &Grammar, rule: RuleId, start: usize) -> State {
        let r = grammar.rule(rule);
        let result = if r.symbols.is_empty() {
            r.postprocess.apply(vec![])
        } else {
            Val::empty_list()
        };
        State { rule, dot: 0, start, ancestor: None, result }
    }

    pub fn key(&self) -> StateKey {
        StateKey { rule: self.rule, dot: self.dot, start: self.start }
    }

    pub fn rule(&self) -> RuleId { self.rule }
    pub fn dot(&self) -> usize { self.dot }
    pub fn start(&self) -> usize { self.start }
    pub fn ancestor(&self) -> Option<StateId> { self.ancestor }
    pub fn result(&self) -> &Val { &self.result }

    pub fn next_expected<'g>(&self, grammar: &'g Grammar) -> Option<&'g Symbol> {
        grammar.rule(self.rule).symbols.get(self.dot)
    }

    pub fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot >= grammar.rule(self.rule).symbols.len()
    }

    /// Complete and started at the beginning of input.
    pub fn is_successful(&self, grammar: &Grammar) -> bool {
        self.start == 0 && self.is_complete(grammar)
    }

    /// Whether this state is waiting on a completion of `rule`.
    pub fn expects_rule(&self, grammar: &Grammar, rule: &Rule) -> bool {
        self.next_expected(grammar)
            .map_or(false, |sym| sym.matches_rule(&rule.name))
    }

    /// The state with the dot advanced past one more symbol, whose matched
    /// value is `result`. `id` must be this state's own handle in `states`.
    ///
    /// When the advance completes the rule, the ancestor chain is walked to
    /// collect every child result (oldest first) and the rule's postprocess
    /// runs exactly once over them.
    pub fn next(&self, id: StateId, result: Val, grammar: &Grammar, states: &States) -> State {
        let mut next = State {
            rule: self.rule,
            dot: self.dot + 1,
            start: self.start,
            ancestor: Some(id),
            result,
        };

        if next.is_complete(grammar) {
            let mut children = Vec::with_capacity(next.dot);
            children.push(next.result.clone());
            let mut node = self;
            while let Some(up) = node.ancestor {
                children.push(node.result.clone());
                node = states.get(up);
            }
            children.reverse();
            next.result = grammar.rule(self.rule).postprocess.apply(children);
        }

        next
    }
}

/// Arena owning every state created during one parse.
#[derive(Default, Debug)]
pub struct States(Vec<State>);

impl States {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, id: StateId) -> &State { &self.0[id.0] }

    pub fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.0.len());
        self.0.push(state);
        id
    }

    pub fn len(&self) -> usize { self.0.len() }

    /// Walk from `id` back to the dot-0 state that began its chain.
    pub fn ancestry(&self, id: StateId) -> impl Iterator<Item=StateId> + '_ {
        std::iter::successors(Some(id), move |&s| self.get(s).ancestor)
    }
}

#[cfg(test)]
#[path = "tests/state.rs"]
mod tests_for_state;
