// Fixed-width unsigned integers packed into 32-bit words.
//
// Value `i` occupies bits `i * bits .. (i + 1) * bits` of the word stream,
// least significant bit first; a value may straddle two words.

use crate::DictomatonError;

const WORD_BITS: usize = u32::BITS as usize;

/// Number of bits needed to store `n`. `width(0) == 0`.
#[inline]
pub fn width(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

#[inline]
fn mask(bits: u32) -> u32 {
    if bits >= u32::BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// A fixed-length array of `bits`-wide unsigned integers.
///
/// All entries start at zero. Values are truncated to `bits` bits on
/// [`set`](PackedArray::set).
#[derive(Clone, PartialEq, Eq)]
pub struct PackedArray {
    len: usize,
    bits: u32,
    words: Vec<u32>,
}

impl PackedArray {
    /// Create a zeroed array of `len` entries of `bits` bits each.
    ///
    /// # Panics
    ///
    /// Panics if `bits` exceeds 32.
    pub fn new(len: usize, bits: u32) -> Self {
        assert!(bits <= u32::BITS, "bit width {bits} exceeds 32");
        PackedArray {
            len,
            bits,
            words: vec![0; word_count(len, bits)],
        }
    }

    /// Rebuild an array from its raw words, as returned by [`words`](Self::words).
    pub fn from_words(len: usize, bits: u32, words: Vec<u32>) -> Result<Self, DictomatonError> {
        if bits > u32::BITS {
            return Err(DictomatonError::Corrupt(format!(
                "bit width {bits} exceeds 32"
            )));
        }
        let expected = word_count(len, bits);
        if words.len() != expected {
            return Err(DictomatonError::Corrupt(format!(
                "packed array of {len} x {bits} bits needs {expected} words, got {}",
                words.len()
            )));
        }
        Ok(PackedArray { len, bits, words })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Width of each entry in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The underlying word storage.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Read entry `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        if self.bits == 0 {
            return 0;
        }

        let bits = self.bits as usize;
        let start = index * bits;
        let word = start / WORD_BITS;
        let shift = start % WORD_BITS;

        let mut value = self.words[word] >> shift;
        if shift + bits > WORD_BITS {
            value |= self.words[word + 1] << (WORD_BITS - shift);
        }
        value & mask(self.bits)
    }

    /// Write entry `index`, keeping only the low `bits` bits of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: u32) {
        assert!(index < self.len, "index {index} out of range for length {}", self.len);
        if self.bits == 0 {
            return;
        }

        let bits = self.bits as usize;
        let mask = mask(self.bits);
        let value = value & mask;
        let start = index * bits;
        let word = start / WORD_BITS;
        let shift = start % WORD_BITS;

        self.words[word] = (self.words[word] & !(mask << shift)) | (value << shift);
        if shift + bits > WORD_BITS {
            let done = WORD_BITS - shift;
            self.words[word + 1] = (self.words[word + 1] & !(mask >> done)) | (value >> done);
        }
    }

    /// Binary search for `value` in the ascending range `from..to`.
    ///
    /// Returns `Ok(index)` of a matching entry, or `Err(index)` with the
    /// position where `value` would be inserted to keep the range sorted.
    pub fn binary_search(&self, from: usize, to: usize, value: u32) -> Result<usize, usize> {
        let (mut low, mut high) = (from, to);
        while low < high {
            let mid = low + (high - low) / 2;
            match self.get(mid).cmp(&value) {
                std::cmp::Ordering::Less => low = mid + 1,
                std::cmp::Ordering::Greater => high = mid,
                std::cmp::Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len).map(move |index| self.get(index))
    }
}

fn word_count(len: usize, bits: u32) -> usize {
    (len * bits as usize).div_ceil(WORD_BITS)
}

impl std::fmt::Debug for PackedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackedArray")
            .field("len", &self.len)
            .field("bits", &self.bits)
            .field("words", &self.words.len())
            .finish()
    }
}
