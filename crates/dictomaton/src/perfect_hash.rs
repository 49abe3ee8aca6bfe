// Perfect hashing over a compiled dictionary.
//
// Sequences are numbered 1..=N in lexicographic order. A sequence's rank is
// one plus the number of sequences that sort before it; those are counted
// while walking the automaton by summing the right-language sizes of the
// transitions skipped at every state, plus one for every final state passed.
//
// Two annotations are supported. State cardinality stores the right-language
// size of every state and sums over skipped siblings at query time. Transition
// cardinality precomputes, per transition, the number of sequences reachable
// through its smaller siblings, so ranking is a single lookup per character
// and unranking a binary search per state.

use crate::dictionary::{Dictionary, Iter};
use crate::packed::{PackedArray, width};
use crate::state_info::StateInfo;
use crate::{Automaton, DictomatonError, format};

/// How rank annotations are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numbering {
    /// Right-language size per state. Smaller, linear sibling scans.
    #[default]
    StateCardinality,
    /// Preceding-sibling counts per transition. Larger, constant-time ranking
    /// steps and binary-search unranking.
    TransitionCardinality,
}

#[derive(Clone, PartialEq, Eq)]
enum Cardinalities {
    /// Indexed by state.
    State(PackedArray),
    /// Indexed by transition.
    Transition(PackedArray),
}

/// A [`Dictionary`] that also maps each sequence to its lexicographic rank
/// and back.
#[derive(Clone, PartialEq, Eq)]
pub struct PerfectHashDictionary {
    dictionary: Dictionary,
    cardinalities: Cardinalities,
}

impl std::fmt::Debug for PerfectHashDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfectHashDictionary")
            .field("numbering", &self.numbering())
            .field("dictionary", &self.dictionary)
            .finish()
    }
}

impl PerfectHashDictionary {
    /// Annotate a compiled dictionary.
    pub fn new(dictionary: Dictionary, numbering: Numbering) -> Self {
        let suffixes = suffix_counts(&dictionary);
        let cardinalities = match numbering {
            Numbering::StateCardinality => Cardinalities::State(suffixes),
            Numbering::TransitionCardinality => {
                Cardinalities::Transition(preceding_counts(&dictionary, &suffixes))
            }
        };
        log::debug!(
            "annotated {} states for perfect hashing ({numbering:?})",
            dictionary.state_count()
        );

        PerfectHashDictionary {
            dictionary,
            cardinalities,
        }
    }

    /// Load a perfect-hash dictionary. Annotations are recomputed; plain
    /// dictionary files get [`Numbering::StateCardinality`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictomatonError> {
        let (dictionary, kind) = format::read(data)?;
        let numbering = match kind {
            format::Kind::TransitionCardinality => Numbering::TransitionCardinality,
            format::Kind::Plain | format::Kind::StateCardinality => Numbering::StateCardinality,
        };
        Ok(Self::new(dictionary, numbering))
    }

    /// Serialize to the binary dictionary format, recording the numbering.
    pub fn to_bytes(&self) -> Vec<u8> {
        let kind = match self.numbering() {
            Numbering::StateCardinality => format::Kind::StateCardinality,
            Numbering::TransitionCardinality => format::Kind::TransitionCardinality,
        };
        format::write(&self.dictionary, kind)
    }

    pub fn numbering(&self) -> Numbering {
        match self.cardinalities {
            Cardinalities::State(_) => Numbering::StateCardinality,
            Cardinalities::Transition(_) => Numbering::TransitionCardinality,
        }
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub fn contains(&self, seq: &str) -> bool {
        self.dictionary.contains(seq)
    }

    /// Sequences in lexicographic, and therefore rank, order.
    pub fn iter(&self) -> Iter<'_> {
        self.dictionary.iter()
    }

    /// Rank of `seq` in `1..=len()`, or `None` if it is not in the dictionary.
    pub fn number(&self, seq: &str) -> Option<u32> {
        self.walk(self.root(), seq).hash()
    }

    /// Walk `seq`, either from the start state or from a previous cursor.
    ///
    /// Resuming from a cursor is equivalent to walking the concatenation of
    /// the cursor's prefix and `seq` from the start state.
    pub fn state_info(
        &self,
        seq: &str,
        resume: Option<&StateInfo>,
    ) -> Result<StateInfo, DictomatonError> {
        let start = match resume {
            Some(info) if !info.is_known() => return Err(DictomatonError::UnknownCursor),
            Some(info) => *info,
            None => self.root(),
        };
        Ok(self.walk(start, seq))
    }

    /// The sequence with rank `rank`, or `None` when `rank` is outside
    /// `1..=len()`.
    pub fn sequence(&self, rank: u32) -> Option<String> {
        if rank == 0 || rank as usize > self.len() {
            return None;
        }

        let dict = &self.dictionary;
        let mut state = dict.start_state();
        let mut remaining = rank;
        let mut seq = String::new();

        if dict.is_final_state(state) {
            remaining -= 1;
            if remaining == 0 {
                return Some(seq);
            }
        }

        loop {
            let transitions = dict.transition_range(state);
            if transitions.is_empty() {
                return None;
            }

            let transition = match &self.cardinalities {
                Cardinalities::State(suffixes) => {
                    let mut chosen = None;
                    for transition in transitions {
                        let count = suffixes.get(dict.target(transition) as usize);
                        if remaining <= count {
                            chosen = Some(transition);
                            break;
                        }
                        remaining -= count;
                    }
                    chosen?
                }
                Cardinalities::Transition(preceding) => {
                    // preceding[start] == 0 < remaining, so the result is
                    // never before the first transition.
                    let transition = match preceding.binary_search(
                        transitions.start,
                        transitions.end,
                        remaining,
                    ) {
                        Ok(hit) => hit - 1,
                        Err(insert) => insert - 1,
                    };
                    remaining -= preceding.get(transition);
                    transition
                }
            };

            seq.push(dict.all_transition_chars()[transition]);
            state = dict.target(transition);
            if dict.is_final_state(state) {
                remaining -= 1;
                if remaining == 0 {
                    return Some(seq);
                }
            }
        }
    }

    /// Render the automaton in Graphviz dot format, annotated with the
    /// cardinalities.
    pub fn to_dot(&self) -> String {
        let dict = &self.dictionary;
        match &self.cardinalities {
            Cardinalities::State(suffixes) => dict.write_dot(
                |state| Some(format!("{state} ({})", suffixes.get(state as usize))),
                |transition| crate::state::dot_label(dict.all_transition_chars()[transition]),
            ),
            Cardinalities::Transition(preceding) => dict.write_dot(
                |state| Some(state.to_string()),
                |transition| {
                    format!(
                        "{} ({})",
                        crate::state::dot_label(dict.all_transition_chars()[transition]),
                        preceding.get(transition)
                    )
                },
            ),
        }
    }

    fn root(&self) -> StateInfo {
        let start = self.dictionary.start_state();
        StateInfo::root(start, self.dictionary.is_final_state(start))
    }

    fn walk(&self, mut info: StateInfo, seq: &str) -> StateInfo {
        let dict = &self.dictionary;
        for ch in seq.chars() {
            let Some(transition) = dict.find_transition(info.state, ch) else {
                info.lose();
                return info;
            };

            info.rank += self.preceding(info.state, transition);
            if dict.is_final_state(info.state) {
                info.rank += 1;
            }
            info.state = dict.target(transition);
            info.transition = Some(transition);
        }
        info.in_final = dict.is_final_state(info.state);
        info
    }

    /// Sequences reachable through the siblings before `transition`.
    fn preceding(&self, state: u32, transition: usize) -> u32 {
        match &self.cardinalities {
            Cardinalities::State(suffixes) => {
                let first = self.dictionary.transition_range(state).start;
                (first..transition)
                    .map(|t| suffixes.get(self.dictionary.target(t) as usize))
                    .sum()
            }
            Cardinalities::Transition(preceding) => preceding.get(transition),
        }
    }
}

impl Automaton for PerfectHashDictionary {
    fn start_state(&self) -> u32 {
        self.dictionary.start_state()
    }

    fn next(&self, state: u32, ch: char) -> Option<u32> {
        self.dictionary.next(state, ch)
    }

    fn is_final(&self, state: u32) -> bool {
        self.dictionary.is_final_state(state)
    }

    fn transitions(&self, state: u32) -> impl Iterator<Item = (char, u32)> + '_ {
        Automaton::transitions(&self.dictionary, state)
    }
}

impl<'a> IntoIterator for &'a PerfectHashDictionary {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Right-language size of every state, by explicit post-order traversal.
fn suffix_counts(dict: &Dictionary) -> PackedArray {
    let unvisited = dict.len() as u32 + 1;
    let mut counts = PackedArray::new(dict.state_count(), width(unvisited));
    for state in 0..dict.state_count() {
        counts.set(state, unvisited);
    }

    // Each frame is a state and the next transition to descend into.
    let start = dict.start_state();
    let mut stack = vec![(start, dict.transition_range(start).start)];
    while let Some(frame) = stack.last_mut() {
        let (state, next) = *frame;
        let transitions = dict.transition_range(state);

        if next < transitions.end {
            frame.1 += 1;
            let target = dict.target(next);
            if counts.get(target as usize) == unvisited {
                stack.push((target, dict.transition_range(target).start));
            }
            continue;
        }

        let mut total = u32::from(dict.is_final_state(state));
        for transition in transitions {
            total += counts.get(dict.target(transition) as usize);
        }
        counts.set(state as usize, total);
        stack.pop();
    }

    counts
}

/// Per transition, the sequences reachable through its smaller siblings.
fn preceding_counts(dict: &Dictionary, suffixes: &PackedArray) -> PackedArray {
    let mut preceding = PackedArray::new(dict.transition_count(), width(dict.len() as u32));
    for state in 0..dict.state_count() as u32 {
        let mut before = 0;
        for transition in dict.transition_range(state) {
            preceding.set(transition, before);
            before += suffixes.get(dict.target(transition) as usize);
        }
    }
    preceding
}
