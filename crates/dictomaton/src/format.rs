// Binary dictionary format: header parsing, serialization, validation.
//
// Layout, all values little-endian 32-bit words:
//
//   header (8 words, see `Header`)
//   state offsets      ceil(state_count * offset_bits / 32) words
//   transition chars   transition_count words, one code point each
//   transition targets ceil(transition_count * target_bits / 32) words
//   final states       ceil(state_count / 32) words, bit i = state i
//
// Perfect-hash annotations are not stored; they are recomputed on load from
// the automaton, which is cheap compared to building it.

use bitvec::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::DictomatonError;
use crate::dictionary::Dictionary;
use crate::packed::{PackedArray, width};

/// Dictionary file magic constants.
const COOKIE1: u32 = 0x4D54_4344;
const COOKIE2: u32 = 0x0001_D1C7;

/// Size of the binary header in bytes.
pub const HEADER_SIZE: usize = size_of::<Header>();

const WORD_SIZE: usize = size_of::<u32>();

/// Raw file header.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Header {
    pub cookie1: u32,
    pub cookie2: u32,
    /// See [`Kind`].
    pub kind: u32,
    pub sequence_count: u32,
    pub state_count: u32,
    pub transition_count: u32,
    /// Bit width of the state offset table.
    pub offset_bits: u32,
    /// Bit width of the transition target table.
    pub target_bits: u32,
}

const _: () = assert!(size_of::<Header>() == 32);

impl Header {
    fn to_native(self) -> Self {
        Header {
            cookie1: u32::from_le(self.cookie1),
            cookie2: u32::from_le(self.cookie2),
            kind: u32::from_le(self.kind),
            sequence_count: u32::from_le(self.sequence_count),
            state_count: u32::from_le(self.state_count),
            transition_count: u32::from_le(self.transition_count),
            offset_bits: u32::from_le(self.offset_bits),
            target_bits: u32::from_le(self.target_bits),
        }
    }
}

/// Which dictionary type a file was written from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Plain,
    StateCardinality,
    TransitionCardinality,
}

impl Kind {
    fn code(self) -> u32 {
        match self {
            Kind::Plain => 0,
            Kind::StateCardinality => 1,
            Kind::TransitionCardinality => 2,
        }
    }

    fn from_code(code: u32) -> Result<Self, DictomatonError> {
        match code {
            0 => Ok(Kind::Plain),
            1 => Ok(Kind::StateCardinality),
            2 => Ok(Kind::TransitionCardinality),
            _ => Err(DictomatonError::UnknownKind(code)),
        }
    }
}

/// Parse and validate the header at the start of `data`.
pub fn parse_header(data: &[u8]) -> Result<Header, DictomatonError> {
    if data.len() < HEADER_SIZE {
        return Err(DictomatonError::TooShort {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let header = bytemuck::pod_read_unaligned::<Header>(&data[..HEADER_SIZE]).to_native();
    if header.cookie1 != COOKIE1 || header.cookie2 != COOKIE2 {
        return Err(DictomatonError::InvalidMagic);
    }
    Kind::from_code(header.kind)?;

    Ok(header)
}

/// Whether `data` starts with a dictionary header.
pub fn is_dictionary(data: &[u8]) -> bool {
    parse_header(data).is_ok()
}

pub(crate) fn write(dict: &Dictionary, kind: Kind) -> Vec<u8> {
    let header = Header {
        cookie1: COOKIE1,
        cookie2: COOKIE2,
        kind: kind.code(),
        sequence_count: dict.len() as u32,
        state_count: dict.state_count() as u32,
        transition_count: dict.transition_count() as u32,
        offset_bits: dict.state_offsets().bits(),
        target_bits: dict.transition_targets().bits(),
    };

    let chars: Vec<u32> = dict.all_transition_chars().iter().map(|&ch| u32::from(ch)).collect();
    let sections: [&[u32]; 5] = [
        bytemuck::cast_slice(std::slice::from_ref(&header)),
        dict.state_offsets().words(),
        &chars,
        dict.transition_targets().words(),
        dict.final_states().as_raw_slice(),
    ];

    let total: usize = sections.iter().map(|section| section.len()).sum();
    let mut out = Vec::with_capacity(total * WORD_SIZE);
    for section in sections {
        for word in section {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
    log::debug!("serialized {kind:?} dictionary: {} bytes", out.len());
    out
}

pub(crate) fn read(data: &[u8]) -> Result<(Dictionary, Kind), DictomatonError> {
    let header = parse_header(data)?;
    let kind = Kind::from_code(header.kind)?;

    let state_count = header.state_count as usize;
    let transition_count = header.transition_count as usize;
    if state_count == 0 {
        return Err(corrupt("dictionary without a start state"));
    }
    if header.offset_bits != width(header.transition_count)
        || header.target_bits != width(header.state_count - 1)
    {
        return Err(corrupt("table widths do not match table sizes"));
    }

    let mut reader = WordReader {
        data,
        pos: HEADER_SIZE,
    };
    let offset_words = reader.words(packed_words(state_count, header.offset_bits))?;
    let char_words = reader.words(transition_count)?;
    let target_words = reader.words(packed_words(transition_count, header.target_bits))?;
    let final_words = reader.words(state_count.div_ceil(u32::BITS as usize))?;
    if reader.pos != data.len() {
        return Err(corrupt("trailing data after final state table"));
    }

    let state_offsets = PackedArray::from_words(state_count, header.offset_bits, offset_words)?;
    let transition_targets =
        PackedArray::from_words(transition_count, header.target_bits, target_words)?;
    let transition_chars = char_words
        .into_iter()
        .map(|code| char::from_u32(code).ok_or_else(|| corrupt("invalid code point")))
        .collect::<Result<Box<[char]>, _>>()?;
    let mut final_states = BitVec::<u32, Lsb0>::from_vec(final_words);
    final_states.truncate(state_count);

    validate_tables(&state_offsets, &transition_chars, &transition_targets)?;
    let sequences = count_sequences(&state_offsets, &transition_targets, &final_states)?;
    if sequences != u64::from(header.sequence_count) {
        return Err(corrupt("sequence count does not match the automaton"));
    }

    log::debug!(
        "loaded {kind:?} dictionary: {} sequences, {state_count} states, {transition_count} transitions",
        header.sequence_count
    );

    let dictionary = Dictionary::from_parts(
        state_offsets,
        transition_chars,
        transition_targets,
        final_states,
        header.sequence_count as usize,
    );
    Ok((dictionary, kind))
}

fn corrupt(reason: &str) -> DictomatonError {
    DictomatonError::Corrupt(reason.to_string())
}

fn packed_words(len: usize, bits: u32) -> usize {
    (len * bits as usize).div_ceil(u32::BITS as usize)
}

/// Sequential little-endian word reader with bounds checks.
struct WordReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl WordReader<'_> {
    fn words(&mut self, count: usize) -> Result<Vec<u32>, DictomatonError> {
        let end = count
            .checked_mul(WORD_SIZE)
            .and_then(|bytes| self.pos.checked_add(bytes))
            .ok_or_else(|| corrupt("section size overflows"))?;
        if end > self.data.len() {
            return Err(DictomatonError::TooShort {
                expected: end,
                actual: self.data.len(),
            });
        }

        // Copy into an aligned buffer; the input slice may be unaligned.
        let mut words = vec![0u32; count];
        bytemuck::cast_slice_mut::<u32, u8>(&mut words).copy_from_slice(&self.data[self.pos..end]);
        for word in &mut words {
            *word = u32::from_le(*word);
        }
        self.pos = end;
        Ok(words)
    }
}

/// Offsets must be ascending from zero, transition characters strictly
/// ascending within a state and targets in range.
fn validate_tables(
    offsets: &PackedArray,
    chars: &[char],
    targets: &PackedArray,
) -> Result<(), DictomatonError> {
    if offsets.get(0) != 0 {
        return Err(corrupt("first state offset is not zero"));
    }

    let state_count = offsets.len();
    for state in 0..state_count {
        let start = offsets.get(state) as usize;
        let end = if state + 1 < state_count {
            offsets.get(state + 1) as usize
        } else {
            chars.len()
        };
        if start > end || end > chars.len() {
            return Err(corrupt("state offsets are not ascending"));
        }
        if chars[start..end].windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(corrupt("transition characters are not sorted"));
        }
    }

    if targets.iter().any(|target| target as usize >= state_count) {
        return Err(corrupt("transition target out of range"));
    }
    Ok(())
}

/// Count accepted sequences, rejecting cyclic automata and automata with
/// unreachable or dead states.
///
/// Kahn's algorithm gives a topological order in which path counts from the
/// start state can be accumulated. Walking that order backwards finds the
/// states that lead to a final state. Ranking assumes every state does,
/// except the lone start state of an empty dictionary.
fn count_sequences(
    offsets: &PackedArray,
    targets: &PackedArray,
    finals: &BitSlice<u32, Lsb0>,
) -> Result<u64, DictomatonError> {
    let state_count = offsets.len();
    let range = |state: usize| {
        let end = if state + 1 < state_count {
            offsets.get(state + 1) as usize
        } else {
            targets.len()
        };
        offsets.get(state) as usize..end
    };

    let mut in_degree = vec![0u32; state_count];
    for target in targets.iter() {
        in_degree[target as usize] += 1;
    }

    let mut paths = vec![0u64; state_count];
    paths[0] = 1;
    let mut ready: Vec<usize> = (0..state_count).filter(|&s| in_degree[s] == 0).collect();
    let mut order = Vec::with_capacity(state_count);
    let mut sequences = 0u64;

    while let Some(state) = ready.pop() {
        order.push(state);
        if finals[state] {
            sequences = sequences.saturating_add(paths[state]);
        }
        for transition in range(state) {
            let target = targets.get(transition) as usize;
            paths[target] = paths[target].saturating_add(paths[state]);
            in_degree[target] -= 1;
            if in_degree[target] == 0 {
                ready.push(target);
            }
        }
    }

    if order.len() != state_count {
        return Err(corrupt("automaton contains a cycle"));
    }
    if paths.contains(&0) {
        return Err(corrupt("state unreachable from the start state"));
    }

    let mut live = vec![false; state_count];
    for &state in order.iter().rev() {
        live[state] =
            finals[state] || range(state).any(|transition| live[targets.get(transition) as usize]);
    }
    if state_count > 1 && live.contains(&false) {
        return Err(corrupt("state does not lead to a final state"));
    }
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DictionaryBuilder, Numbering, PerfectHashDictionary};

    const WORDS: [&str; 7] = [
        "al", "alleen", "avonden", "zeemeeuw", "zeker", "zeven", "zoeven",
    ];

    fn build(words: &[&str]) -> Dictionary {
        let mut builder = DictionaryBuilder::new();
        builder.add_all(words).unwrap();
        builder.build()
    }

    #[test]
    fn round_trip_plain() {
        let dict = build(&WORDS);
        let bytes = dict.to_bytes();
        assert_eq!(bytes.len() % 4, 0);

        let loaded = Dictionary::from_bytes(&bytes).unwrap();
        assert_eq!(loaded, dict);
        assert_eq!(loaded.iter().collect::<Vec<_>>(), WORDS);
    }

    #[test]
    fn round_trip_keeps_numbering() {
        let mut builder = DictionaryBuilder::new();
        builder.add_all(WORDS).unwrap();
        let dict = builder.build_perfect_hash(Numbering::TransitionCardinality);

        let loaded = PerfectHashDictionary::from_bytes(&dict.to_bytes()).unwrap();
        assert_eq!(loaded.numbering(), Numbering::TransitionCardinality);
        assert_eq!(loaded, dict);
        assert_eq!(loaded.number("zeker"), Some(5));
    }

    #[test]
    fn plain_file_loads_as_perfect_hash() {
        let bytes = build(&WORDS).to_bytes();
        let dict = PerfectHashDictionary::from_bytes(&bytes).unwrap();
        assert_eq!(dict.numbering(), Numbering::StateCardinality);
        assert_eq!(dict.sequence(2).as_deref(), Some("alleen"));
    }

    #[test]
    fn round_trip_empty() {
        let dict = build(&[]);
        let loaded = Dictionary::from_bytes(&dict.to_bytes()).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.state_count(), 1);
    }

    #[test]
    fn header_fields() {
        let bytes = build(&WORDS).to_bytes();
        let header = parse_header(&bytes).unwrap();
        assert_eq!(header.sequence_count, 7);
        assert_eq!(header.state_count, 21);
        assert_eq!(header.transition_count, 25);
        assert_eq!(header.offset_bits, 5);
        assert_eq!(header.target_bits, 5);
        assert!(is_dictionary(&bytes));
        assert!(!is_dictionary(b"al\nalleen\n"));
    }

    #[test]
    fn reject_too_short() {
        let err = parse_header(&[0u8; 8]).unwrap_err();
        assert!(matches!(
            err,
            DictomatonError::TooShort {
                expected: 32,
                actual: 8
            }
        ));
    }

    #[test]
    fn reject_invalid_magic() {
        let mut bytes = build(&WORDS).to_bytes();
        bytes[0] ^= 0xFF;
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::InvalidMagic));
    }

    #[test]
    fn reject_unknown_kind() {
        let mut bytes = build(&WORDS).to_bytes();
        bytes[8] = 9;
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::UnknownKind(9)));
    }

    #[test]
    fn reject_truncated_body() {
        let bytes = build(&WORDS).to_bytes();
        let err = Dictionary::from_bytes(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(matches!(err, DictomatonError::TooShort { .. }));
    }

    #[test]
    fn reject_trailing_data() {
        let mut bytes = build(&WORDS).to_bytes();
        bytes.extend_from_slice(&[0; 4]);
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::Corrupt(_)));
    }

    #[test]
    fn reject_wrong_sequence_count() {
        let mut bytes = build(&WORDS).to_bytes();
        bytes[12] = 8;
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::Corrupt(_)));
    }

    #[test]
    fn reject_cycle() {
        // One state, final, with a transition to itself on 'a'.
        let mut bytes = Vec::new();
        for word in [COOKIE1, COOKIE2, 0, 1, 1, 1, 1, 0] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&0u32.to_le_bytes()); // offsets
        bytes.extend_from_slice(&u32::from('a').to_le_bytes()); // chars
        bytes.extend_from_slice(&1u32.to_le_bytes()); // finals
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::Corrupt(ref reason) if reason.contains("cycle")));
    }

    #[test]
    fn reject_dead_state() {
        // State 0: a -> 1, b -> 2, c -> 2, d -> 1. State 1 is final, state 2
        // is a non-final leaf.
        let mut bytes = Vec::new();
        for word in [COOKIE1, COOKIE2, 2, 2, 3, 4, 3, 2] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&(4u32 << 3 | 4 << 6).to_le_bytes()); // offsets: 0, 4, 4
        for ch in ['a', 'b', 'c', 'd'] {
            bytes.extend_from_slice(&u32::from(ch).to_le_bytes());
        }
        bytes.extend_from_slice(&(1u32 | 2 << 2 | 2 << 4 | 1 << 6).to_le_bytes()); // targets: 1, 2, 2, 1
        bytes.extend_from_slice(&0b010u32.to_le_bytes()); // finals
        let err = PerfectHashDictionary::from_bytes(&bytes).unwrap_err();
        assert!(
            matches!(err, DictomatonError::Corrupt(ref reason) if reason.contains("final state"))
        );
    }

    #[test]
    fn reject_unreachable_state() {
        // State 0: a -> 1. States 1 and 2 are final leaves; nothing reaches 2.
        let mut bytes = Vec::new();
        for word in [COOKIE1, COOKIE2, 0, 1, 3, 1, 1, 2] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&0b110u32.to_le_bytes()); // offsets: 0, 1, 1
        bytes.extend_from_slice(&u32::from('a').to_le_bytes()); // chars
        bytes.extend_from_slice(&1u32.to_le_bytes()); // targets: 1
        bytes.extend_from_slice(&0b110u32.to_le_bytes()); // finals
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(
            matches!(err, DictomatonError::Corrupt(ref reason) if reason.contains("unreachable"))
        );
    }

    #[test]
    fn reject_invalid_code_point() {
        let mut bytes = Vec::new();
        for word in [COOKIE1, COOKIE2, 0, 1, 2, 1, 1, 1] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.extend_from_slice(&0b10u32.to_le_bytes()); // offsets: 0, 1
        bytes.extend_from_slice(&0xD800u32.to_le_bytes()); // surrogate
        bytes.extend_from_slice(&1u32.to_le_bytes()); // target 1
        bytes.extend_from_slice(&0b10u32.to_le_bytes()); // state 1 final
        let err = Dictionary::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DictomatonError::Corrupt(_)));
    }
}
