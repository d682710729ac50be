//! Traditional earley: gradually build, from left-to-right, a table of
//! states for each position in the input.
//!
//! Table `i` holds every dotted rule consistent with the first `i` tokens.
//! A table only grows: prediction and completion append to the table being
//! processed, scanning appends to the one after it. Tables are created
//! lazily, so a table that is still empty when its position is reached means
//! no derivation survived the previous token.

use crate::grammar::Grammar;
use crate::lexer::Token;
use crate::state::{State, StateId, StateKey, States};
use crate::symbol::Symbol;
use crate::value::Val;

use std::collections::HashSet;

/// The states of one input position, in insertion order.
#[derive(Default, Debug)]
pub struct Table {
    states: Vec<StateId>,
    seen: HashSet<StateKey>,
}

impl Table {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.states.len() }

    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    pub fn state_ids(&self) -> &[StateId] { &self.states }

    pub fn contains(&self, key: &StateKey) -> bool { self.seen.contains(key) }

    /// Insert `state` unless an equal-keyed state is already present. This is
    /// the only deduplication point in the algorithm; a rejected state is
    /// dropped along with its ancestor chain and result.
    pub fn add_state(&mut self, states: &mut States, state: State) -> Option<StateId> {
        if !self.seen.insert(state.key()) {
            return None;
        }
        let id = states.push(state);
        self.states.push(id);
        Some(id)
    }
}

/// A token paired with the value a scan of it binds.
#[derive(Clone, Debug)]
pub struct Scanned {
    pub token: Token,
    pub value: Val,
}

pub struct ParseChart<'g> {
    grammar: &'g Grammar,
    tables: Vec<Table>,
    states: States,
}

impl<'g> ParseChart<'g> {
    /// A chart whose first table is seeded with every root rule at dot 0.
    pub fn new(grammar: &'g Grammar) -> Self {
        let mut chart = ParseChart { grammar, tables: vec![Table::new()], states: States::new() };
        for &rule in grammar.root_rules() {
            chart.add_state(0, State::new(grammar, rule, 0));
        }
        chart
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }

    pub fn states(&self) -> &States { &self.states }

    pub fn state(&self, id: StateId) -> &State { self.states.get(id) }

    pub fn tables(&self) -> &[Table] { &self.tables }

    fn ensure_capacity(&mut self, index: usize) {
        while index >= self.tables.len() {
            self.tables.push(Table::new());
        }
    }

    /// The table at `index`, created (empty) if the chart has not reached it.
    pub fn table(&mut self, index: usize) -> &Table {
        self.ensure_capacity(index);
        &self.tables[index]
    }

    pub fn final_table(&self) -> &Table {
        let last = self.tables.len() - 1;
        &self.tables[last]
    }

    pub fn add_state(&mut self, index: usize, state: State) -> Option<StateId> {
        self.ensure_capacity(index);
        self.tables[index].add_state(&mut self.states, state)
    }

    /// Advance the dot of `id` past a symbol matched by `result`, placing the
    /// new state in table `target`.
    pub fn advance_state(&mut self, id: StateId, target: usize, result: Val) -> Option<StateId> {
        let next = self.states.get(id).next(id, result, self.grammar, &self.states);
        self.add_state(target, next)
    }

    /// Visit every state of table `index` in insertion order, including the
    /// ones `visit` itself appends to that table along the way.
    pub fn iterate_states(&mut self, index: usize, mut visit: impl FnMut(&mut Self, StateId)) {
        self.ensure_capacity(index);
        let mut k = 0;
        while k < self.tables[index].len() {
            let id = self.tables[index].states[k];
            visit(self, id);
            k += 1;
        }
    }

    /// Run predict/scan/complete over table `index` until it reaches its
    /// fixed point. `token` is the token at this position, absent for the
    /// extra position one past the end of input.
    pub fn process(&mut self, index: usize, token: Option<&Scanned>) {
        let grammar = self.grammar;
        self.iterate_states(index, |chart, id| {
            let state = chart.state(id);
            match state.next_expected(grammar) {
                None => chart.complete(index, id),
                Some(Symbol::Rule(name)) => chart.predict(index, name),
                Some(sym) => {
                    if let Some(scanned) = token {
                        if sym.matches_token(&scanned.token.value, &scanned.token) {
                            log::trace!("scan {} at {}", sym, index);
                            chart.advance_state(id, index + 1, scanned.value.clone());
                        }
                    }
                }
            }
        });
    }

    fn predict(&mut self, index: usize, name: &str) {
        let grammar = self.grammar;
        for &rule in grammar.rules_by_name(name) {
            let state = State::new(grammar, rule, index);
            if self.add_state(index, state).is_some() {
                log::trace!("predict {} at {}", name, index);
            }
        }
    }

    fn complete(&mut self, index: usize, id: StateId) {
        let grammar = self.grammar;
        let completed = self.state(id);
        let start = completed.start();
        let rule = grammar.rule(completed.rule());
        let result = completed.result().clone();
        log::trace!("complete {} from {} at {}", rule.name(), start, index);
        self.iterate_states(start, |chart, waiting| {
            if chart.state(waiting).expects_rule(grammar, rule) {
                chart.advance_state(waiting, index, result.clone());
            }
        });
    }

    /// Completed root-rule states spanning the whole input, in the order
    /// they were added to the final table.
    pub fn success_states(&self) -> Vec<StateId> {
        self.final_table()
            .state_ids()
            .iter()
            .copied()
            .filter(|&id| {
                let s = self.state(id);
                self.grammar.is_root_rule(s.rule()) && s.is_successful(self.grammar)
            })
            .collect()
    }

    /// Debug forms of the symbols the states of the final table expect next,
    /// deduplicated in order of first appearance.
    pub fn predictions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.final_table()
            .state_ids()
            .iter()
            .filter_map(|&id| self.state(id).next_expected(self.grammar))
            .map(|sym| sym.debug())
            .filter(|p| seen.insert(p.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;
