// Incremental construction of minimal acyclic automata from sorted input.
//
// Sequences arrive in strictly increasing order. After each insertion only
// the path of the previous sequence below the shared prefix can still change,
// so it is minimized immediately: every state on it is either replaced by an
// equivalent state from the register or registered itself. Only one
// unminimized path exists at any time.

use hashbrown::HashMap;

use crate::DictomatonError;
use crate::dictionary::Dictionary;
use crate::perfect_hash::{Numbering, PerfectHashDictionary};
use crate::state::{State, StateGraph, StateId, dot_label};

const START: StateId = 0;

/// Builds a minimal dictionary automaton from lexicographically sorted,
/// duplicate-free sequences.
///
/// Once finalized (by [`to_dot`](Self::to_dot)) the builder rejects further
/// sequences. [`build`](Self::build) and
/// [`build_perfect_hash`](Self::build_perfect_hash) consume it.
#[derive(Debug)]
pub struct DictionaryBuilder {
    graph: StateGraph,
    register: HashMap<State, StateId>,
    previous: Option<String>,
    sequence_count: usize,
    finalized: bool,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        let mut graph = StateGraph::default();
        graph.add_state();
        DictionaryBuilder {
            graph,
            register: HashMap::new(),
            previous: None,
            sequence_count: 0,
            finalized: false,
        }
    }

    /// Number of sequences added so far.
    pub fn len(&self) -> usize {
        self.sequence_count
    }

    pub fn is_empty(&self) -> bool {
        self.sequence_count == 0
    }

    /// Add a sequence. It must be strictly greater than the previous one.
    ///
    /// On error the builder is left unchanged.
    pub fn add(&mut self, seq: &str) -> Result<&mut Self, DictomatonError> {
        if self.finalized {
            return Err(DictomatonError::FinalizedBuilder);
        }
        if let Some(previous) = self.previous.as_deref().filter(|&previous| previous >= seq) {
            return Err(DictomatonError::OrderViolation {
                previous: previous.to_owned(),
                current: seq.to_owned(),
            });
        }

        self.insert_unchecked(seq);
        Ok(self)
    }

    /// Add a sequence known to sort after the previous one, on a builder
    /// that is not finalized.
    pub(crate) fn insert_unchecked(&mut self, seq: &str) {
        debug_assert!(!self.finalized);
        debug_assert!(self.previous.as_deref().is_none_or(|previous| previous < seq));

        // Follow the longest prefix that is already in the automaton.
        let mut state = START;
        let mut consumed = 0;
        for ch in seq.chars() {
            match self.graph.state(state).target(ch) {
                Some(next) => {
                    state = next;
                    consumed += ch.len_utf8();
                }
                None => break,
            }
        }

        if self.graph.state(state).has_outgoing() {
            self.replace_or_register(state);
        }
        self.add_suffix(state, &seq[consumed..]);

        match &mut self.previous {
            Some(previous) => {
                previous.clear();
                previous.push_str(seq);
            }
            None => self.previous = Some(seq.to_owned()),
        }
        self.sequence_count += 1;
    }

    /// Add every sequence of `seqs`, stopping at the first error.
    pub fn add_all<I, S>(&mut self, seqs: I) -> Result<&mut Self, DictomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for seq in seqs {
            self.add(seq.as_ref())?;
        }
        Ok(self)
    }

    /// Compile into an immutable [`Dictionary`].
    pub fn build(mut self) -> Dictionary {
        self.finalize();
        Dictionary::compile(&self.graph, START, self.sequence_count)
    }

    /// Compile into a [`PerfectHashDictionary`] with the given numbering
    /// strategy.
    pub fn build_perfect_hash(self, numbering: Numbering) -> PerfectHashDictionary {
        PerfectHashDictionary::new(self.build(), numbering)
    }

    /// Render the minimized automaton in Graphviz dot format.
    ///
    /// Finalizes the builder: later calls to [`add`](Self::add) fail.
    pub fn to_dot(&mut self) -> String {
        self.finalize();
        self.graph.to_dot(START, dot_label)
    }

    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.replace_or_register(START);
        self.finalized = true;
        log::debug!(
            "finalized builder: {} sequences, {} states allocated, {} registered",
            self.sequence_count,
            self.graph.len(),
            self.register.len()
        );
    }

    /// Minimize the chain of last-added children below `state`, bottom-up.
    fn replace_or_register(&mut self, state: StateId) {
        let mut path = vec![state];
        let mut current = state;
        while let Some(child) = self.graph.state(current).last_target() {
            path.push(child);
            current = child;
        }

        for pair in path.windows(2).rev() {
            let (parent, child) = (pair[0], pair[1]);
            let key = self.graph.state(child);
            match self.register.get(key) {
                Some(&equivalent) => self.graph.state_mut(parent).set_last_target(equivalent),
                None => {
                    let key = key.clone();
                    self.register.insert(key, child);
                }
            }
        }
    }

    fn add_suffix(&mut self, mut state: StateId, suffix: &str) {
        for ch in suffix.chars() {
            let next = self.graph.add_state();
            self.graph.state_mut(state).add_transition(ch, next);
            state = next;
        }
        self.graph.state_mut(state).set_final(true);
    }
}
