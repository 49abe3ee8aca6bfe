// Levenshtein automata: accept every string within edit distance k of a word.
//
// Construction instantiates a precomputed parametric table for the word. The
// automaton has one state per (word offset, parametric state) pair; the input
// character only matters through its characteristic vector over the next
// 2k + 1 word characters. Every character that does not occur in the word has
// the all-zero vector, so a single catch-all transition stands in for all of
// them.

mod parametric;

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::state::{StateGraph, StateId, dot_label};
use crate::{Automaton, DictomatonError};

use self::parametric::ParametricTable;

const START: StateId = 0;

/// Deterministic automaton accepting all strings within a bounded edit
/// distance (insertions, deletions and substitutions) of a word.
///
/// Only distances 1 and 2 are supported.
#[derive(Debug, Clone)]
pub struct LevenshteinAutomaton {
    word: String,
    max_distance: u8,
    graph: StateGraph,
    other: char,
    state_count: usize,
}

impl LevenshteinAutomaton {
    /// Build the automaton for `word` and maximum edit distance `max_distance`.
    pub fn new(word: &str, max_distance: u8) -> Result<Self, DictomatonError> {
        let table = ParametricTable::for_distance(max_distance)
            .ok_or(DictomatonError::UnsupportedEditDistance(max_distance))?;

        let chars: Vec<char> = word.chars().collect();
        let mut alphabet = chars.clone();
        alphabet.sort_unstable();
        alphabet.dedup();
        let other = catch_all(&alphabet);

        let parametric_states = table.state_count();
        let total = (chars.len() + 1) * parametric_states;
        let mut graph = StateGraph::with_capacity(total);
        for _ in 0..total {
            graph.add_state();
        }

        for id in 0..total {
            let offset = id / parametric_states;
            let parametric = id % parametric_states;
            let rest = &chars[offset..];

            for &symbol in alphabet.iter().chain(std::iter::once(&other)) {
                let vector = characteristic_vector(rest, symbol, table.window());
                if vector == 0 && symbol != other {
                    continue;
                }
                if let Some((to, increment)) = table.transition(parametric, rest.len(), vector) {
                    let target = (offset + increment) * parametric_states + to;
                    graph.state_mut(id).add_transition(symbol, target);
                }
            }

            let accepting = rest.len() <= table.max_offset_errors(parametric);
            graph.state_mut(id).set_final(accepting);
        }

        graph.prune_redundant(START, other);
        let state_count = graph.breadth_first(START).order.len();
        log::debug!(
            "levenshtein automaton for {word:?} (k = {max_distance}): {state_count} reachable states"
        );

        Ok(LevenshteinAutomaton {
            word: word.to_owned(),
            max_distance,
            graph,
            other,
            state_count,
        })
    }

    /// The word the automaton was built for.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn max_distance(&self) -> u8 {
        self.max_distance
    }

    /// Number of states reachable from the start state.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Transition function, falling back to the catch-all transition for
    /// characters without an explicit one.
    pub fn next(&self, state: usize, ch: char) -> Option<usize> {
        let state = self.graph.state(state);
        state.target(ch).or_else(|| state.target(self.other))
    }

    pub fn start_state(&self) -> usize {
        START
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.graph.state(state).is_final()
    }

    /// Whether `candidate` is within the maximum edit distance of the word.
    pub fn accepts(&self, candidate: &str) -> bool {
        candidate
            .chars()
            .try_fold(START, |state, ch| self.next(state, ch))
            .is_some_and(|state| self.is_final(state))
    }

    /// All sequences of `automaton` within the maximum edit distance of the
    /// word.
    ///
    /// Explores the product automaton breadth-first; dead Levenshtein states
    /// have no transitions, so the search stays bounded by the word.
    pub fn intersection_language<A: Automaton>(&self, automaton: &A) -> HashSet<String> {
        let mut language = HashSet::new();
        let start = automaton.start_state();
        if automaton.is_final(start) && self.is_final(START) {
            language.insert(String::new());
        }

        let mut queue = VecDeque::from([(start, START, String::new())]);
        while let Some((dict_state, lev_state, prefix)) = queue.pop_front() {
            for (ch, dict_next) in automaton.transitions(dict_state) {
                let Some(lev_next) = self.next(lev_state, ch) else {
                    continue;
                };

                let mut seq = String::with_capacity(prefix.len() + ch.len_utf8());
                seq.push_str(&prefix);
                seq.push(ch);
                if automaton.is_final(dict_next) && self.is_final(lev_next) {
                    language.insert(seq.clone());
                }
                queue.push_back((dict_next, lev_next, seq));
            }
        }

        language
    }

    /// Render the reachable automaton in Graphviz dot format. The catch-all
    /// transition is labelled `<other>`.
    pub fn to_dot(&self) -> String {
        let other = self.other;
        self.graph.to_dot(START, |ch| {
            if ch == other {
                "<other>".to_string()
            } else {
                dot_label(ch)
            }
        })
    }
}

/// Bit vector of matches of `symbol` against the first `min(window, len)`
/// characters of `rest`, first character in the most significant bit.
fn characteristic_vector(rest: &[char], symbol: char, window: usize) -> usize {
    rest.iter()
        .take(window)
        .fold(0, |vector, &ch| (vector << 1) | usize::from(ch == symbol))
}

/// Smallest code point that does not occur in the sorted, deduplicated
/// `alphabet`.
fn catch_all(alphabet: &[char]) -> char {
    let mut candidate = '\0';
    for &ch in alphabet {
        if ch != candidate {
            break;
        }
        // Skips the surrogate gap.
        candidate = char::from_u32(u32::from(candidate) + 1).unwrap_or('\u{E000}');
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DictionaryBuilder, Numbering};

    fn edit_distance(a: &str, b: &str) -> usize {
        let b: Vec<char> = b.chars().collect();
        let mut row: Vec<usize> = (0..=b.len()).collect();
        for (i, ca) in a.chars().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let above = row[j + 1];
                row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + usize::from(ca != cb));
                diagonal = above;
            }
        }
        row[b.len()]
    }

    /// All strings over `alphabet` up to length `max_len`, in sorted order.
    fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut strings = vec![String::new()];
        let mut layer = vec![String::new()];
        for _ in 0..max_len {
            let mut next = Vec::new();
            for prefix in &layer {
                for &ch in alphabet {
                    let mut s = prefix.clone();
                    s.push(ch);
                    next.push(s);
                }
            }
            strings.extend(next.iter().cloned());
            layer = next;
        }
        strings.sort();
        strings
    }

    #[test]
    fn unsupported_distance() {
        let err = LevenshteinAutomaton::new("word", 3).unwrap_err();
        assert!(matches!(err, DictomatonError::UnsupportedEditDistance(3)));
        assert!(LevenshteinAutomaton::new("word", 0).is_err());
    }

    #[test]
    fn catch_all_is_smallest_missing() {
        assert_eq!(catch_all(&['a', 'b']), '\0');
        assert_eq!(catch_all(&['\0', '\u{1}', 'a']), '\u{2}');
        assert_eq!(catch_all(&[]), '\0');
    }

    #[test]
    fn characteristic_vectors() {
        let word: Vec<char> = "abcab".chars().collect();
        assert_eq!(characteristic_vector(&word, 'a', 3), 0b100);
        assert_eq!(characteristic_vector(&word, 'a', 5), 0b10010);
        assert_eq!(characteristic_vector(&word[3..], 'b', 5), 0b01);
        assert_eq!(characteristic_vector(&word[5..], 'b', 5), 0);
    }

    #[test]
    fn accepts_matches_edit_distance() {
        let alphabet = ['a', 'b', 'c'];
        let candidates = all_strings(&alphabet, 5);
        for k in [1u8, 2] {
            for word in ["", "a", "ab", "abc", "aab", "cabba"] {
                let la = LevenshteinAutomaton::new(word, k).unwrap();
                for candidate in &candidates {
                    assert_eq!(
                        la.accepts(candidate),
                        edit_distance(word, candidate) <= usize::from(k),
                        "word {word:?}, candidate {candidate:?}, k {k}"
                    );
                }
            }
        }
    }

    #[test]
    fn intersection_matches_brute_force() {
        let alphabet = ['a', 'b', 'c'];
        let words = all_strings(&alphabet, 5);
        let mut builder = DictionaryBuilder::new();
        builder.add_all(&words).unwrap();
        let dict = builder.build();

        for k in [1u8, 2] {
            for word in ["", "b", "ca", "abc", "bbac", "acbca"] {
                let expected: HashSet<String> = words
                    .iter()
                    .filter(|candidate| edit_distance(word, candidate) <= usize::from(k))
                    .cloned()
                    .collect();
                let la = LevenshteinAutomaton::new(word, k).unwrap();
                assert_eq!(la.intersection_language(&dict), expected, "{word:?} k {k}");
            }
        }
    }

    #[test]
    fn intersection_with_perfect_hash_dictionary() {
        let mut builder = DictionaryBuilder::new();
        builder
            .add_all(["al", "alleen", "avonden", "zeemeeuw", "zeker", "zeven", "zoeven"])
            .unwrap();
        let dict = builder.build_perfect_hash(Numbering::TransitionCardinality);

        let la = LevenshteinAutomaton::new("zeven", 1).unwrap();
        let found = la.intersection_language(&dict);
        let expected: HashSet<String> = ["zeven", "zoeven"].into_iter().map(String::from).collect();
        assert_eq!(found, expected);

        let la = LevenshteinAutomaton::new("zeven", 2).unwrap();
        let found = la.intersection_language(&dict);
        let expected: HashSet<String> =
            ["zeker", "zeven", "zoeven"].into_iter().map(String::from).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn characters_outside_the_word() {
        let la = LevenshteinAutomaton::new("kat", 1).unwrap();
        assert!(la.accepts("kät"));
        assert!(la.accepts("\0at"));
        assert!(la.accepts("k😀at"));
        assert!(!la.accepts("k😀😀t"));
    }

    #[test]
    fn empty_word() {
        let la = LevenshteinAutomaton::new("", 1).unwrap();
        assert!(la.accepts(""));
        assert!(la.accepts("x"));
        assert!(!la.accepts("xy"));
    }

    #[test]
    fn accessors_and_dot() {
        let la = LevenshteinAutomaton::new("ab", 1).unwrap();
        assert_eq!(la.word(), "ab");
        assert_eq!(la.max_distance(), 1);
        assert!(la.state_count() > 1);

        let dot = la.to_dot();
        assert!(dot.starts_with("digraph G {\n"));
        assert!(dot.contains("[label=\"<other>\"]"));
        assert!(dot.contains("[peripheries=2]"));
    }
}
