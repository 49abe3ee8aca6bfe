// Compiled, immutable dictionary automaton.
//
// States are numbered breadth-first from the start state (state 0). The
// transitions of state `s` occupy `state_offsets[s] .. state_offsets[s + 1]`
// (or up to the transition count for the last state) in two parallel tables,
// sorted by character, so a lookup is a binary search over one small range.

use std::fmt::Write as _;
use std::ops::Range;

use bitvec::prelude::*;

use crate::packed::{PackedArray, width};
use crate::state::{StateGraph, StateId, dot_label};
use crate::{Automaton, DictomatonError, format};

/// An immutable dictionary of strings, stored as a minimal acyclic automaton.
///
/// Built by [`DictionaryBuilder::build`](crate::DictionaryBuilder::build).
#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary {
    state_offsets: PackedArray,
    transition_chars: Box<[char]>,
    transition_targets: PackedArray,
    final_states: BitVec<u32, Lsb0>,
    sequence_count: usize,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("sequence_count", &self.sequence_count)
            .field("state_count", &self.state_count())
            .field("transition_count", &self.transition_count())
            .finish()
    }
}

impl Dictionary {
    /// Flatten the states reachable from `start` into compact tables.
    pub(crate) fn compile(graph: &StateGraph, start: StateId, sequence_count: usize) -> Self {
        let numbering = graph.breadth_first(start);
        let state_count = numbering.order.len();
        let transition_count: usize = numbering
            .order
            .iter()
            .map(|&id| graph.state(id).transitions().len())
            .sum();

        let mut state_offsets = PackedArray::new(state_count, width(transition_count as u32));
        let mut transition_chars = Vec::with_capacity(transition_count);
        let mut transition_targets =
            PackedArray::new(transition_count, width(state_count.saturating_sub(1) as u32));
        let mut final_states = bitvec![u32, Lsb0; 0; state_count];

        for (number, &id) in numbering.order.iter().enumerate() {
            let state = graph.state(id);
            state_offsets.set(number, transition_chars.len() as u32);
            for &(ch, to) in state.transitions() {
                transition_targets.set(transition_chars.len(), numbering.number(to));
                transition_chars.push(ch);
            }
            final_states.set(number, state.is_final());
        }

        log::debug!(
            "compiled dictionary: {sequence_count} sequences, {state_count} states, \
             {transition_count} transitions, offsets {} bits, targets {} bits",
            state_offsets.bits(),
            transition_targets.bits()
        );

        Dictionary {
            state_offsets,
            transition_chars: transition_chars.into_boxed_slice(),
            transition_targets,
            final_states,
            sequence_count,
        }
    }

    /// Assemble a dictionary from already validated tables.
    pub(crate) fn from_parts(
        state_offsets: PackedArray,
        transition_chars: Box<[char]>,
        transition_targets: PackedArray,
        final_states: BitVec<u32, Lsb0>,
        sequence_count: usize,
    ) -> Self {
        Dictionary {
            state_offsets,
            transition_chars,
            transition_targets,
            final_states,
            sequence_count,
        }
    }

    /// Load a dictionary written by [`to_bytes`](Self::to_bytes).
    ///
    /// Perfect-hash files are accepted too; their numbering is dropped.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictomatonError> {
        format::read(data).map(|(dictionary, _)| dictionary)
    }

    /// Serialize to the binary dictionary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        format::write(self, format::Kind::Plain)
    }

    /// Number of sequences in the dictionary.
    pub fn len(&self) -> usize {
        self.sequence_count
    }

    pub fn is_empty(&self) -> bool {
        self.sequence_count == 0
    }

    pub fn state_count(&self) -> usize {
        self.state_offsets.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_chars.len()
    }

    pub fn start_state(&self) -> u32 {
        0
    }

    /// Whether `state` is final.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range.
    pub fn is_final_state(&self, state: u32) -> bool {
        self.final_states[state as usize]
    }

    /// Follow the transition on `ch` from `state`.
    pub fn next(&self, state: u32, ch: char) -> Option<u32> {
        self.find_transition(state, ch)
            .map(|transition| self.target(transition))
    }

    /// Whether `seq` is in the dictionary.
    pub fn contains(&self, seq: &str) -> bool {
        seq.chars()
            .try_fold(self.start_state(), |state, ch| self.next(state, ch))
            .is_some_and(|state| self.is_final_state(state))
    }

    /// Characters on the outgoing transitions of `state`, ascending.
    pub fn transition_chars(&self, state: u32) -> &[char] {
        &self.transition_chars[self.transition_range(state)]
    }

    /// All sequences in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            dictionary: self,
            stack: vec![(self.start_state(), String::new())],
            remaining: self.sequence_count,
        }
    }

    /// Render the automaton in Graphviz dot format.
    pub fn to_dot(&self) -> String {
        self.write_dot(|_| None, |transition| dot_label(self.transition_chars[transition]))
    }

    pub(crate) fn state_offsets(&self) -> &PackedArray {
        &self.state_offsets
    }

    pub(crate) fn transition_targets(&self) -> &PackedArray {
        &self.transition_targets
    }

    pub(crate) fn all_transition_chars(&self) -> &[char] {
        &self.transition_chars
    }

    pub(crate) fn final_states(&self) -> &BitVec<u32, Lsb0> {
        &self.final_states
    }

    /// Index range of the outgoing transitions of `state`.
    pub(crate) fn transition_range(&self, state: u32) -> Range<usize> {
        let state = state as usize;
        let start = self.state_offsets.get(state) as usize;
        let end = if state + 1 < self.state_offsets.len() {
            self.state_offsets.get(state + 1) as usize
        } else {
            self.transition_chars.len()
        };
        start..end
    }

    /// Global index of the transition on `ch` from `state`.
    pub(crate) fn find_transition(&self, state: u32, ch: char) -> Option<usize> {
        let range = self.transition_range(state);
        self.transition_chars[range.clone()]
            .binary_search(&ch)
            .ok()
            .map(|offset| range.start + offset)
    }

    /// Target state of a transition.
    pub(crate) fn target(&self, transition: usize) -> u32 {
        self.transition_targets.get(transition)
    }

    /// Shared dot writer; callers choose state and transition labels.
    pub(crate) fn write_dot(
        &self,
        state_label: impl Fn(u32) -> Option<String>,
        transition_label: impl Fn(usize) -> String,
    ) -> String {
        let mut dot = String::from("digraph G {\n");
        for state in 0..self.state_count() as u32 {
            match (state_label(state), self.is_final_state(state)) {
                (Some(label), true) => {
                    let _ = writeln!(dot, "{state} [label=\"{label}\",peripheries=2];");
                }
                (Some(label), false) => {
                    let _ = writeln!(dot, "{state} [label=\"{label}\"];");
                }
                (None, true) => {
                    let _ = writeln!(dot, "{state} [peripheries=2];");
                }
                (None, false) => {}
            }
            for transition in self.transition_range(state) {
                let _ = writeln!(
                    dot,
                    "{state} -> {} [label=\"{}\"];",
                    self.target(transition),
                    transition_label(transition)
                );
            }
        }
        dot.push('}');
        dot
    }
}

impl Automaton for Dictionary {
    fn start_state(&self) -> u32 {
        Dictionary::start_state(self)
    }

    fn next(&self, state: u32, ch: char) -> Option<u32> {
        Dictionary::next(self, state, ch)
    }

    fn is_final(&self, state: u32) -> bool {
        self.is_final_state(state)
    }

    fn transitions(&self, state: u32) -> impl Iterator<Item = (char, u32)> + '_ {
        self.transition_range(state)
            .map(move |transition| (self.transition_chars[transition], self.target(transition)))
    }
}

/// Lexicographic iterator over the sequences of a [`Dictionary`].
///
/// Depth-first with an explicit stack; children are pushed in reverse
/// character order so the smallest is visited first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    dictionary: &'a Dictionary,
    stack: Vec<(u32, String)>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((state, prefix)) = self.stack.pop() {
            for transition in self.dictionary.transition_range(state).rev() {
                let mut seq = String::with_capacity(prefix.len() + 4);
                seq.push_str(&prefix);
                seq.push(self.dictionary.transition_chars[transition]);
                self.stack.push((self.dictionary.target(transition), seq));
            }

            if self.dictionary.is_final_state(state) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(prefix);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
