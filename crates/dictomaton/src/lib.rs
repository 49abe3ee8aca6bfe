//! Finite-state dictionaries backed by minimal acyclic automata.
//!
//! A sorted word list is minimized incrementally into a minimal deterministic
//! acyclic automaton, compiled into a compact immutable transition table and
//! optionally annotated with right-language cardinalities, which turns the
//! automaton into a perfect hash: a bijection between its words and `1..=N`
//! that follows lexicographic order. Levenshtein automata for edit distance
//! 1 and 2 can be intersected with any compiled dictionary.
//!
//! # Architecture
//!
//! - [`packed`] -- Fixed-width bit-packed integer arrays (the storage primitive)
//! - [`builder`] -- Incremental minimal automaton construction
//! - [`dictionary`] -- Compiled, immutable dictionary automaton
//! - [`perfect_hash`] -- Word <-> rank numbering over a compiled dictionary
//! - [`state_info`] -- Resumable ranking cursor
//! - [`levenshtein`] -- Parametric Levenshtein automata and intersection
//! - [`format`] -- Binary persistence of compiled dictionaries
//! - [`map`] -- Immutable string-keyed maps over perfect-hash dictionaries
//!
//! # Example
//!
//! ```
//! use dictomaton::{DictionaryBuilder, LevenshteinAutomaton, Numbering};
//!
//! let mut builder = DictionaryBuilder::new();
//! builder.add_all(["al", "alleen", "avonden", "zeker"])?;
//! let dict = builder.build_perfect_hash(Numbering::StateCardinality);
//!
//! assert!(dict.contains("alleen"));
//! assert_eq!(dict.number("avonden"), Some(3));
//! assert_eq!(dict.sequence(1).as_deref(), Some("al"));
//!
//! let la = LevenshteinAutomaton::new("zaker", 1)?;
//! assert!(la.intersection_language(&dict).contains("zeker"));
//! # Ok::<(), dictomaton::DictomatonError>(())
//! ```

pub mod builder;
pub mod dictionary;
pub mod format;
pub mod levenshtein;
pub mod map;
pub mod packed;
pub mod perfect_hash;
pub mod state_info;

mod state;

pub use builder::DictionaryBuilder;
pub use dictionary::Dictionary;
pub use levenshtein::LevenshteinAutomaton;
pub use map::{ImmutableStringMap, MapBuilder, OrderedMapBuilder};
pub use packed::PackedArray;
pub use perfect_hash::{Numbering, PerfectHashDictionary};
pub use state_info::StateInfo;

/// Error type for dictionary construction, querying and loading.
#[derive(Debug, thiserror::Error)]
pub enum DictomatonError {
    #[error("sequences are not added in lexicographic order: {previous:?} >= {current:?}")]
    OrderViolation { previous: String, current: String },
    #[error("cannot add a sequence to a finalized builder")]
    FinalizedBuilder,
    #[error("unsupported edit distance {0}, only 1 and 2 are available")]
    UnsupportedEditDistance(u8),
    #[error("cannot resume traversal from an unknown state")]
    UnknownCursor,
    #[error("invalid magic number in dictionary header")]
    InvalidMagic,
    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("unknown dictionary kind {0}")]
    UnknownKind(u32),
    #[error("corrupt dictionary data: {0}")]
    Corrupt(String),
}

/// Read access to a deterministic acyclic automaton.
///
/// States are dense integers and `start_state` is the root. Implemented by the
/// compiled dictionaries; [`LevenshteinAutomaton::intersection_language`] is
/// generic over it.
pub trait Automaton {
    /// The start state.
    fn start_state(&self) -> u32;

    /// Follow the transition on `ch`, if there is one.
    fn next(&self, state: u32, ch: char) -> Option<u32>;

    /// Whether `state` accepts.
    fn is_final(&self, state: u32) -> bool;

    /// Outgoing `(character, target)` pairs of `state`, in ascending
    /// character order.
    fn transitions(&self, state: u32) -> impl Iterator<Item = (char, u32)> + '_;
}
