// Mutable automaton states in an index arena, shared by the dictionary
// builder and Levenshtein automaton construction.
//
// States refer to each other by arena index, so two states are equal exactly
// when they agree on finality and on every (character, target index) pair.
// That equality is what the builder's register keys on.

use std::collections::VecDeque;
use std::fmt::Write as _;

pub(crate) type StateId = usize;

const UNNUMBERED: u32 = u32::MAX;

/// A single mutable state: finality plus transitions sorted by character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct State {
    transitions: Vec<(char, StateId)>,
    is_final: bool,
}

impl State {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    pub fn has_outgoing(&self) -> bool {
        !self.transitions.is_empty()
    }

    pub fn transitions(&self) -> &[(char, StateId)] {
        &self.transitions
    }

    pub fn target(&self, ch: char) -> Option<StateId> {
        self.transitions
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|index| self.transitions[index].1)
    }

    /// Add or replace the transition on `ch`, keeping character order.
    pub fn add_transition(&mut self, ch: char, to: StateId) {
        match self.transitions.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(index) => self.transitions[index].1 = to,
            Err(index) => self.transitions.insert(index, (ch, to)),
        }
    }

    /// Target of the transition with the largest character.
    pub fn last_target(&self) -> Option<StateId> {
        self.transitions.last().map(|&(_, to)| to)
    }

    pub fn set_last_target(&mut self, to: StateId) {
        if let Some(last) = self.transitions.last_mut() {
            last.1 = to;
        }
    }
}

/// Breadth-first numbering of the states reachable from a start state.
pub(crate) struct BreadthFirst {
    /// Arena indices in numbering order; `order[0]` is the start state.
    pub order: Vec<StateId>,
    numbers: Vec<u32>,
}

impl BreadthFirst {
    /// Dense number of a reachable arena state.
    pub fn number(&self, id: StateId) -> u32 {
        self.numbers[id]
    }
}

/// Arena owning all states of one automaton under construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct StateGraph {
    states: Vec<State>,
}

impl StateGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        StateGraph {
            states: Vec::with_capacity(capacity),
        }
    }

    pub fn add_state(&mut self) -> StateId {
        self.states.push(State::default());
        self.states.len() - 1
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id]
    }

    /// Number the states reachable from `start` in breadth-first order,
    /// following transitions in character order.
    pub fn breadth_first(&self, start: StateId) -> BreadthFirst {
        let mut numbers = vec![UNNUMBERED; self.states.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(id) = queue.pop_front() {
            if numbers[id] != UNNUMBERED {
                continue;
            }
            numbers[id] = order.len() as u32;
            order.push(id);
            queue.extend(self.states[id].transitions.iter().map(|&(_, to)| to));
        }

        BreadthFirst { order, numbers }
    }

    /// Drop every transition that leads to the same state as the transition
    /// on `other`, in all states reachable from `start`.
    pub fn prune_redundant(&mut self, start: StateId, other: char) {
        let numbering = self.breadth_first(start);
        for &id in &numbering.order {
            let state = &mut self.states[id];
            if let Some(fallback) = state.target(other) {
                state
                    .transitions
                    .retain(|&(ch, to)| ch == other || to != fallback);
            }
        }
    }

    /// Render the automaton reachable from `start` in Graphviz dot format.
    pub fn to_dot(&self, start: StateId, label: impl Fn(char) -> String) -> String {
        let numbering = self.breadth_first(start);
        let mut dot = String::from("digraph G {\n");
        for &id in &numbering.order {
            let number = numbering.number(id);
            let state = &self.states[id];
            if state.is_final {
                let _ = writeln!(dot, "{number} [peripheries=2];");
            }
            for &(ch, to) in &state.transitions {
                let _ = writeln!(
                    dot,
                    "{number} -> {} [label=\"{}\"];",
                    numbering.number(to),
                    label(ch)
                );
            }
        }
        dot.push('}');
        dot
    }
}

/// Escape a character for use inside a quoted dot label.
pub(crate) fn dot_label(ch: char) -> String {
    match ch {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        _ => ch.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_stay_sorted() {
        let mut state = State::default();
        state.add_transition('c', 3);
        state.add_transition('a', 1);
        state.add_transition('b', 2);
        assert_eq!(state.transitions(), &[('a', 1), ('b', 2), ('c', 3)]);

        state.add_transition('b', 7);
        assert_eq!(state.target('b'), Some(7));
        assert_eq!(state.last_target(), Some(3));

        state.set_last_target(9);
        assert_eq!(state.target('c'), Some(9));
        assert_eq!(state.target('d'), None);
    }

    #[test]
    fn equality_is_structural() {
        let mut a = State::default();
        let mut b = State::default();
        a.add_transition('x', 4);
        b.add_transition('x', 4);
        assert_eq!(a, b);

        b.set_final(true);
        assert_ne!(a, b);
    }

    #[test]
    fn breadth_first_skips_unreachable_and_shared() {
        let mut graph = StateGraph::default();
        let s0 = graph.add_state();
        let s1 = graph.add_state();
        let _unreachable = graph.add_state();
        let s3 = graph.add_state();
        graph.state_mut(s0).add_transition('b', s3);
        graph.state_mut(s0).add_transition('a', s1);
        graph.state_mut(s1).add_transition('z', s3);

        let numbering = graph.breadth_first(s0);
        assert_eq!(numbering.order, vec![s0, s1, s3]);
        assert_eq!(numbering.number(s3), 2);
    }

    #[test]
    fn prune_keeps_distinct_targets() {
        let mut graph = StateGraph::default();
        let s0 = graph.add_state();
        let s1 = graph.add_state();
        let s2 = graph.add_state();
        graph.state_mut(s0).add_transition('\0', s1);
        graph.state_mut(s0).add_transition('a', s1);
        graph.state_mut(s0).add_transition('b', s2);

        graph.prune_redundant(s0, '\0');
        assert_eq!(graph.state(s0).transitions(), &[('\0', s1), ('b', s2)]);
    }

    #[test]
    fn dot_output() {
        let mut graph = StateGraph::default();
        let s0 = graph.add_state();
        let s1 = graph.add_state();
        graph.state_mut(s0).add_transition('"', s1);
        graph.state_mut(s1).set_final(true);

        assert_eq!(
            graph.to_dot(s0, dot_label),
            "digraph G {\n0 -> 1 [label=\"\\\"\"];\n1 [peripheries=2];\n}"
        );
    }
}
