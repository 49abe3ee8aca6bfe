// Resumable ranking cursor for perfect-hash traversal.

/// Position reached while walking a [`PerfectHashDictionary`] one prefix at a
/// time.
///
/// A cursor is *known* when every character walked so far had a transition.
/// Known cursors can be handed back to
/// [`state_info`](crate::PerfectHashDictionary::state_info) to continue the
/// walk without re-reading the prefix; the fresh root cursor is known as well.
///
/// [`PerfectHashDictionary`]: crate::PerfectHashDictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateInfo {
    /// Sequences ordered before the current prefix's right-language.
    pub(crate) rank: u32,
    pub(crate) state: u32,
    /// Transition taken last, `None` at the root.
    pub(crate) transition: Option<usize>,
    pub(crate) in_final: bool,
    pub(crate) known: bool,
}

impl StateInfo {
    /// Cursor at the start state.
    pub(crate) fn root(start: u32, start_is_final: bool) -> Self {
        StateInfo {
            rank: 0,
            state: start,
            transition: None,
            in_final: start_is_final,
            known: true,
        }
    }

    /// Mark the walk as fallen off the automaton.
    pub(crate) fn lose(&mut self) {
        self.known = false;
        self.in_final = false;
        self.transition = None;
    }

    /// Whether the walked prefix is a prefix of some dictionary sequence.
    pub fn is_known(&self) -> bool {
        self.known
    }

    /// Whether the walked prefix is itself a dictionary sequence.
    pub fn is_final(&self) -> bool {
        self.known && self.in_final
    }

    /// Rank of the walked prefix, if it is a dictionary sequence.
    pub fn hash(&self) -> Option<u32> {
        self.is_final().then_some(self.rank + 1)
    }

    /// Current automaton state, if known.
    pub fn state(&self) -> Option<u32> {
        self.known.then_some(self.state)
    }

    /// Index of the last transition taken, if any.
    pub fn last_transition(&self) -> Option<usize> {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_cursor() {
        let root = StateInfo::root(0, false);
        assert!(root.is_known());
        assert!(!root.is_final());
        assert_eq!(root.hash(), None);
        assert_eq!(root.state(), Some(0));
        assert_eq!(root.last_transition(), None);

        let accepting = StateInfo::root(0, true);
        assert_eq!(accepting.hash(), Some(1));
    }

    #[test]
    fn lost_cursor_hides_state() {
        let mut info = StateInfo {
            rank: 4,
            state: 7,
            transition: Some(3),
            in_final: true,
            known: true,
        };
        assert_eq!(info.hash(), Some(5));

        info.lose();
        assert!(!info.is_known());
        assert!(!info.is_final());
        assert_eq!(info.hash(), None);
        assert_eq!(info.state(), None);
    }
}
