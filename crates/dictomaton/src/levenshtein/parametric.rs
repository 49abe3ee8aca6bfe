// Precomputed parametric transition tables for Levenshtein automata.
//
// A parametric state is a set of (relative offset, errors) positions in the
// word, normalized so that its smallest offset is zero. Transitions depend
// only on the parametric state and on the characteristic vector of the input
// character over the next `min(2k + 1, remaining)` word characters, so one
// table per edit distance serves every word.
//
// Tables are grouped by class: the number of word characters that are still
// visible, capped at 2k + 1. Only the first `valid_states[class]` parametric
// states can occur in a class. The entry for characteristic vector `v` and
// parametric state `p` is at `v * valid_states[class] + p`; `-1` marks a dead
// transition.

/// Parametric transition table for one edit distance.
pub(crate) struct ParametricTable {
    edits: u8,
    valid_states: &'static [usize],
    to_states: &'static [&'static [i8]],
    increments: &'static [&'static [u8]],
    max_offset_errors: &'static [u8],
}

impl ParametricTable {
    /// The table for edit distance `edits`, if one exists.
    pub(crate) fn for_distance(edits: u8) -> Option<&'static ParametricTable> {
        match edits {
            1 => Some(&DISTANCE_ONE),
            2 => Some(&DISTANCE_TWO),
            _ => None,
        }
    }

    /// Number of parametric states.
    pub(crate) fn state_count(&self) -> usize {
        self.max_offset_errors.len()
    }

    /// Length of the characteristic vector window, `2k + 1`.
    pub(crate) fn window(&self) -> usize {
        2 * usize::from(self.edits) + 1
    }

    /// Transition of parametric state `state` with `remaining` word characters
    /// left at its offset, on characteristic vector `vector`.
    ///
    /// Returns the target parametric state and the offset increment.
    pub(crate) fn transition(
        &self,
        state: usize,
        remaining: usize,
        vector: usize,
    ) -> Option<(usize, usize)> {
        let class = remaining.min(self.window());
        let valid = self.valid_states[class];
        if state >= valid {
            return None;
        }

        let index = vector * valid + state;
        let to = *self.to_states[class].get(index)?;
        if to < 0 {
            return None;
        }

        Some((to as usize, usize::from(self.increments[class][index])))
    }

    /// A state accepts when at most this many word characters are left.
    pub(crate) fn max_offset_errors(&self, state: usize) -> usize {
        usize::from(self.max_offset_errors[state])
    }
}

static DISTANCE_ONE: ParametricTable = ParametricTable {
    edits: 1,
    valid_states: &[2, 3, 5, 5],
    to_states: &[
        &[
            1, -1,
        ],
        &[
            2, -1, -1, 0, 1, 1,
        ],
        &[
            2, -1, -1, -1, -1, 4, -1, 1, -1, 1, 0, 1, 1, 1, 1, 0, 1, 2, 1, 2,
        ],
        &[
            2, -1, -1, -1, -1, 2, -1, -1, 1, 1, 4, -1, 1, -1, 1, 4, -1, 1, 1, 2,
            0, 1, 1, 1, 1, 0, 1, 1, 3, 3, 0, 1, 2, 1, 2, 0, 1, 2, 3, 4,
        ],
    ],
    increments: &[
        &[
            0, 0,
        ],
        &[
            0, 0, 0, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 0, 2, 0, 2, 0, 0, 2, 3, 2,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
    ],
    max_offset_errors: &[1, 0, 1, 2, 2],
};

static DISTANCE_TWO: ParametricTable = ParametricTable {
    edits: 2,
    valid_states: &[3, 5, 11, 21, 30, 30],
    to_states: &[
        &[
            1, 2, -1,
        ],
        &[
            3, 4, -1, 4, -1, 0, 1, 2, 1, 2,
        ],
        &[
            3, 4, -1, 10, -1, 10, 4, 2, -1, 10, -1, 9, 10, -1, 7, 2, 10, 10, 2, -1,
            7, 2, 0, 1, 2, 1, 2, 1, 1, 4, 2, 1, 2, 0, 1, 2, 3, 4, 1, 1,
            4, 2, 3, 4,
        ],
        &[
            3, 4, -1, 10, -1, 20, 4, 4, -1, 20, -1, 4, 2, -1, 10, 4, 2, -1, 4, -1,
            -1, 14, 4, -1, 20, -1, 16, 17, 1, 2, 16, 2, 4, 2, -1, 20, 17, 2, -1, 1,
            2, 2, 9, 10, -1, 7, 2, 20, 10, 4, -1, 7, 2, 10, 2, -1, 7, 10, 4, 2,
            4, -1, 2, 9, 10, -1, 7, 2, 16, 20, 1, 2, 18, 4, 10, 2, -1, 7, 20, 4,
            2, 1, 2, 4, 0, 1, 2, 1, 2, 6, 1, 10, 2, 6, 2, 1, 8, 2, 1, 1,
            8, 2, 10, 2, 2, 0, 1, 2, 6, 2, 5, 6, 7, 8, 5, 8, 1, 8, 2, 6,
            6, 8, 2, 7, 8, 8, 0, 1, 2, 3, 4, 6, 1, 10, 2, 3, 4, 1, 8, 2,
            3, 1, 10, 4, 10, 2, 4, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 8,
            2, 3, 6, 10, 4, 7, 8, 10,
        ],
        &[
            3, 4, -1, 10, -1, 20, 4, 4, -1, 20, -1, 4, 4, -1, 10, 4, 4, -1, 10, -1,
            -1, -1, -1, 4, -1, -1, -1, -1, -1, -1, 3, 4, -1, 10, -1, 29, 4, 10, -1, 29,
            -1, 22, 1, 2, 26, 22, 1, 2, 7, 2, 2, -1, -1, 10, -1, 2, -1, 2, 2, 2,
            14, 4, -1, 20, -1, 16, 17, 1, 2, 16, 2, 4, 4, -1, 20, 17, 4, -1, 1, 2,
            2, -1, -1, 1, 2, -1, 2, -1, 2, 2, 14, 4, -1, 20, -1, 16, 17, 1, 2, 16,
            2, 22, 1, 2, 29, 27, 1, 2, 3, 4, 4, -1, -1, 1, 2, 2, 2, 2, 4, 4,
            9, 10, -1, 7, 2, 20, 10, 4, -1, 7, 2, 10, 4, -1, 7, 10, 10, 2, 10, -1,
            2, -1, 2, 4, -1, -1, 2, 2, -1, 2, 9, 10, -1, 7, 2, 29, 10, 10, -1, 23,
            2, 26, 1, 2, 23, 26, 7, 8, 7, 2, 8, -1, 2, 10, -1, 2, 2, 8, 2, 8,
            9, 10, -1, 7, 2, 16, 20, 1, 2, 18, 4, 10, 4, -1, 7, 20, 10, 2, 1, 2,
            4, -1, 2, 1, 2, -1, 4, 2, 2, 4, 9, 10, -1, 7, 2, 16, 20, 1, 2, 18,
            4, 26, 1, 2, 23, 29, 7, 8, 3, 4, 10, -1, 2, 1, 2, 2, 4, 8, 4, 10,
            0, 1, 2, 1, 2, 6, 1, 10, 2, 6, 2, 1, 19, 2, 1, 1, 19, 2, 20, 2,
            2, 2, 2, 10, 2, 2, 2, 2, 2, 2, 0, 1, 2, 1, 2, 15, 1, 20, 2, 15,
            2, 11, 12, 13, 11, 11, 12, 13, 16, 13, 13, 2, 2, 20, 2, 13, 2, 13, 13, 13,
            0, 1, 2, 6, 2, 5, 6, 7, 8, 5, 8, 1, 19, 2, 6, 6, 19, 2, 7, 8,
            8, 2, 2, 7, 8, 2, 8, 2, 8, 8, 0, 1, 2, 6, 2, 5, 6, 7, 8, 5,
            8, 11, 12, 13, 15, 15, 12, 13, 18, 19, 19, 2, 2, 7, 8, 13, 8, 13, 19, 19,
            0, 1, 2, 3, 4, 6, 1, 10, 2, 3, 4, 1, 19, 2, 3, 1, 20, 4, 20, 2,
            4, 2, 4, 10, 2, 2, 4, 4, 2, 4, 0, 1, 2, 3, 4, 15, 1, 20, 2, 14,
            4, 11, 12, 13, 14, 11, 16, 17, 16, 13, 17, 2, 4, 20, 2, 13, 4, 17, 13, 17,
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 19, 2, 3, 6, 20, 4, 7, 8,
            10, 2, 4, 7, 8, 2, 10, 4, 8, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
            10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 2, 4, 7, 8, 13, 10, 17, 19, 20,
        ],
        &[
            3, 4, -1, 10, -1, 20, 4, 4, -1, 20, -1, 4, 4, -1, 10, 4, 4, -1, 10, -1,
            -1, -1, -1, 4, -1, -1, -1, -1, -1, -1, 3, 4, -1, 10, -1, 20, 4, 4, -1, 20,
            -1, 4, 10, -1, 10, 4, 10, -1, 20, -1, -1, 2, 2, 17, 2, 2, 2, 2, 2, 2,
            3, 4, -1, 10, -1, 29, 4, 10, -1, 29, -1, 22, 1, 2, 26, 22, 1, 2, 7, 2,
            2, -1, -1, 10, -1, 2, -1, 2, 2, 2, 3, 4, -1, 10, -1, 29, 4, 10, -1, 29,
            -1, 22, 1, 2, 26, 22, 1, 2, 7, 2, 2, 2, 2, 20, 2, 4, 2, 4, 4, 4,
            14, 4, -1, 20, -1, 16, 17, 1, 2, 16, 2, 4, 4, -1, 20, 17, 4, -1, 1, 2,
            2, -1, -1, 1, 2, -1, 2, -1, 2, 2, 14, 4, -1, 20, -1, 16, 17, 1, 2, 16,
            2, 4, 10, -1, 20, 17, 10, -1, 6, 2, 2, 2, 2, 6, 8, 2, 8, 2, 8, 8,
            14, 4, -1, 20, -1, 16, 17, 1, 2, 16, 2, 22, 1, 2, 29, 27, 1, 2, 3, 4,
            4, -1, -1, 1, 2, 2, 2, 2, 4, 4, 14, 4, -1, 20, -1, 16, 17, 1, 2, 16,
            2, 22, 1, 2, 29, 27, 1, 2, 3, 4, 4, 2, 2, 6, 8, 4, 8, 4, 10, 10,
            9, 10, -1, 7, 2, 20, 10, 4, -1, 7, 2, 10, 4, -1, 7, 10, 10, 2, 10, -1,
            2, -1, 2, 4, -1, -1, 2, 2, -1, 2, 9, 10, -1, 7, 2, 20, 10, 4, -1, 7,
            2, 10, 10, -1, 7, 10, 20, 2, 20, -1, 2, 2, 13, 17, 2, 2, 13, 13, 2, 13,
            9, 10, -1, 7, 2, 29, 10, 10, -1, 23, 2, 26, 1, 2, 23, 26, 7, 8, 7, 2,
            8, -1, 2, 10, -1, 2, 2, 8, 2, 8, 9, 10, -1, 7, 2, 29, 10, 10, -1, 23,
            2, 26, 1, 2, 23, 26, 7, 8, 7, 2, 8, 2, 13, 20, 2, 4, 13, 19, 4, 19,
            9, 10, -1, 7, 2, 16, 20, 1, 2, 18, 4, 10, 4, -1, 7, 20, 10, 2, 1, 2,
            4, -1, 2, 1, 2, -1, 4, 2, 2, 4, 9, 10, -1, 7, 2, 16, 20, 1, 2, 18,
            4, 10, 10, -1, 7, 20, 20, 2, 6, 2, 4, 2, 13, 6, 8, 2, 17, 13, 8, 17,
            9, 10, -1, 7, 2, 16, 20, 1, 2, 18, 4, 26, 1, 2, 23, 29, 7, 8, 3, 4,
            10, -1, 2, 1, 2, 2, 4, 8, 4, 10, 9, 10, -1, 7, 2, 16, 20, 1, 2, 18,
            4, 26, 1, 2, 23, 29, 7, 8, 3, 4, 10, 2, 13, 6, 8, 4, 17, 19, 10, 20,
            0, 1, 2, 1, 2, 6, 1, 10, 2, 6, 2, 1, 19, 2, 1, 1, 19, 2, 20, 2,
            2, 2, 2, 10, 2, 2, 2, 2, 2, 2, 0, 1, 2, 1, 2, 6, 1, 10, 2, 6,
            2, 1, 28, 2, 1, 1, 28, 2, 29, 2, 2, 21, 21, 26, 21, 21, 21, 21, 21, 21,
            0, 1, 2, 1, 2, 15, 1, 20, 2, 15, 2, 11, 12, 13, 11, 11, 12, 13, 16, 13,
            13, 2, 2, 20, 2, 13, 2, 13, 13, 13, 0, 1, 2, 1, 2, 15, 1, 20, 2, 15,
            2, 11, 12, 13, 11, 11, 12, 13, 16, 13, 13, 21, 21, 29, 21, 25, 21, 25, 25, 25,
            0, 1, 2, 6, 2, 5, 6, 7, 8, 5, 8, 1, 19, 2, 6, 6, 19, 2, 7, 8,
            8, 2, 2, 7, 8, 2, 8, 2, 8, 8, 0, 1, 2, 6, 2, 5, 6, 7, 8, 5,
            8, 1, 28, 2, 6, 6, 28, 2, 23, 8, 8, 21, 21, 23, 24, 21, 24, 21, 24, 24,
            0, 1, 2, 6, 2, 5, 6, 7, 8, 5, 8, 11, 12, 13, 15, 15, 12, 13, 18, 19,
            19, 2, 2, 7, 8, 13, 8, 13, 19, 19, 0, 1, 2, 6, 2, 5, 6, 7, 8, 5,
            8, 11, 12, 13, 15, 15, 12, 13, 18, 19, 19, 21, 21, 23, 24, 25, 24, 25, 28, 28,
            0, 1, 2, 3, 4, 6, 1, 10, 2, 3, 4, 1, 19, 2, 3, 1, 20, 4, 20, 2,
            4, 2, 4, 10, 2, 2, 4, 4, 2, 4, 0, 1, 2, 3, 4, 6, 1, 10, 2, 3,
            4, 1, 28, 2, 3, 1, 29, 4, 29, 2, 4, 21, 22, 26, 21, 21, 22, 22, 21, 22,
            0, 1, 2, 3, 4, 15, 1, 20, 2, 14, 4, 11, 12, 13, 14, 11, 16, 17, 16, 13,
            17, 2, 4, 20, 2, 13, 4, 17, 13, 17, 0, 1, 2, 3, 4, 15, 1, 20, 2, 14,
            4, 11, 12, 13, 14, 11, 16, 17, 16, 13, 17, 21, 22, 29, 21, 25, 22, 27, 25, 27,
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 19, 2, 3, 6, 20, 4, 7, 8,
            10, 2, 4, 7, 8, 2, 10, 4, 8, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
            10, 1, 28, 2, 3, 6, 29, 4, 23, 8, 10, 21, 22, 23, 24, 21, 26, 22, 24, 26,
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
            20, 2, 4, 7, 8, 13, 10, 17, 19, 20, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
            10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29,
        ],
    ],
    increments: &[
        &[
            0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 1, 1, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 2, 0,
            0, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 3, 0, 2, 0,
            0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 0, 3, 0, 0, 0, 3, 0, 3,
            3, 3, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 2, 0, 3, 0, 0, 0, 2, 2,
            2, 0, 2, 0, 0, 0, 0, 2, 0, 0, 3, 3, 0, 2, 0, 3, 0, 0, 0, 2,
            2, 3, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 3, 0, 2, 0,
            0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0,
            0, 0, 4, 4, 0, 0, 4, 4, 2, 4, 4, 0, 0, 2, 0, 4, 0, 4, 4, 4,
            0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 0, 3, 0, 0, 0, 3, 0, 3, 3,
            3, 0, 0, 3, 3, 0, 3, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0,
            3, 0, 4, 4, 0, 0, 4, 4, 3, 3, 3, 0, 0, 3, 3, 4, 3, 4, 3, 3,
            0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 2, 0, 3, 0, 0, 0, 2, 2, 2, 0,
            2, 0, 2, 2, 0, 0, 2, 2, 0, 2, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0,
            2, 0, 4, 4, 0, 0, 2, 2, 2, 4, 2, 0, 2, 2, 0, 4, 2, 2, 4, 2,
            0, 0, 0, 0, 2, 0, 0, 3, 3, 0, 2, 0, 3, 0, 0, 0, 2, 2, 3, 3,
            2, 0, 2, 3, 3, 0, 2, 2, 3, 2, 0, 0, 0, 0, 2, 0, 0, 3, 3, 0,
            2, 0, 4, 4, 0, 0, 2, 2, 3, 3, 2, 0, 2, 3, 3, 4, 2, 2, 3, 2,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 3, 0, 2, 0,
            0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0,
            0, 0, 3, 0, 0, 0, 3, 0, 2, 0, 0, 5, 5, 2, 5, 5, 5, 5, 5, 5,
            0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 4, 4, 0, 0, 4, 4, 2, 4,
            4, 0, 0, 2, 0, 4, 0, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0,
            0, 0, 4, 4, 0, 0, 4, 4, 2, 4, 4, 5, 5, 2, 5, 4, 5, 4, 4, 4,
            0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 0, 3, 0, 0, 0, 3, 0, 3, 3,
            3, 0, 0, 3, 3, 0, 3, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0,
            3, 0, 3, 0, 0, 0, 3, 0, 3, 3, 3, 5, 5, 3, 3, 5, 3, 5, 3, 3,
            0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 0, 4, 4, 0, 0, 4, 4, 3, 3,
            3, 0, 0, 3, 3, 4, 3, 4, 3, 3, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0,
            3, 0, 4, 4, 0, 0, 4, 4, 3, 3, 3, 5, 5, 3, 3, 4, 3, 4, 3, 3,
            0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 2, 0, 3, 0, 0, 0, 2, 2, 2, 0,
            2, 0, 2, 2, 0, 0, 2, 2, 0, 2, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0,
            2, 0, 3, 0, 0, 0, 2, 2, 2, 0, 2, 5, 2, 2, 5, 5, 2, 2, 5, 2,
            0, 0, 0, 0, 2, 0, 0, 2, 0, 0, 2, 0, 4, 4, 0, 0, 2, 2, 2, 4,
            2, 0, 2, 2, 0, 4, 2, 2, 4, 2, 0, 0, 0, 0, 2, 0, 0, 2, 0, 0,
            2, 0, 4, 4, 0, 0, 2, 2, 2, 4, 2, 5, 2, 2, 5, 4, 2, 2, 4, 2,
            0, 0, 0, 0, 2, 0, 0, 3, 3, 0, 2, 0, 3, 0, 0, 0, 2, 2, 3, 3,
            2, 0, 2, 3, 3, 0, 2, 2, 3, 2, 0, 0, 0, 0, 2, 0, 0, 3, 3, 0,
            2, 0, 3, 0, 0, 0, 2, 2, 3, 3, 2, 5, 2, 3, 3, 5, 2, 2, 3, 2,
            0, 0, 0, 0, 2, 0, 0, 3, 3, 0, 2, 0, 4, 4, 0, 0, 2, 2, 3, 3,
            2, 0, 2, 3, 3, 4, 2, 2, 3, 2, 0, 0, 0, 0, 2, 0, 0, 3, 3, 0,
            2, 0, 4, 4, 0, 0, 2, 2, 3, 3, 2, 5, 2, 3, 3, 4, 2, 2, 3, 2,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ],
    ],
    max_offset_errors: &[2, 1, 0, 2, 1, 3, 2, 3, 2, 3, 2, 3, 4, 3, 3, 3, 4, 3, 4, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn check_shape(table: &ParametricTable) {
        let classes = table.window() + 1;
        assert_eq!(table.valid_states.len(), classes);
        assert_eq!(table.to_states.len(), classes);
        assert_eq!(table.increments.len(), classes);
        assert_eq!(table.valid_states[classes - 1], table.state_count());

        for class in 0..classes {
            let expected = (1usize << class) * table.valid_states[class];
            assert_eq!(table.to_states[class].len(), expected, "class {class}");
            assert_eq!(table.increments[class].len(), expected, "class {class}");
            for &to in table.to_states[class] {
                assert!(to < table.state_count() as i8);
            }
            for &increment in table.increments[class] {
                assert!(usize::from(increment) <= class);
            }
        }
    }

    #[test]
    fn table_shapes() {
        check_shape(ParametricTable::for_distance(1).unwrap());
        check_shape(ParametricTable::for_distance(2).unwrap());
    }

    #[test]
    fn unsupported_distances() {
        assert!(ParametricTable::for_distance(0).is_none());
        assert!(ParametricTable::for_distance(3).is_none());
    }

    #[test]
    fn exact_match_advances_one() {
        let table = ParametricTable::for_distance(1).unwrap();
        // Start state, three characters left, input matches the first one.
        assert_eq!(table.transition(0, 3, 0b100), Some((0, 1)));
        // Nothing left: only insertion survives.
        assert_eq!(table.transition(0, 0, 0), Some((1, 0)));
    }

    #[test]
    fn invalid_state_for_class() {
        let table = ParametricTable::for_distance(1).unwrap();
        assert_eq!(table.transition(4, 0, 0), None);
    }

    #[test]
    fn start_state_finality() {
        let one = ParametricTable::for_distance(1).unwrap();
        let two = ParametricTable::for_distance(2).unwrap();
        assert_eq!(one.max_offset_errors(0), 1);
        assert_eq!(two.max_offset_errors(0), 2);
    }
}
