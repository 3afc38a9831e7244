//! Circular navigation over a fixed-length image sequence.

/// Wrap `index` into `[0, len)`, always non-negative.
///
/// Returns 0 for an empty sequence.
pub fn wrap(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as i64) as usize
}

/// Owns the current position in an image sequence.
///
/// The index is always in range while `len > 0`. An empty sequence has no
/// selection and every navigation call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    /// Create a navigator over `len` items positioned at the clamped `requested` index.
    pub fn new(requested: i64, len: usize) -> Self {
        let mut nav = Self::default();
        nav.reset_to(requested, len);
        nav
    }

    /// Current index, or `None` when the sequence is empty.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Length of the sequence being navigated.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance by one, wrapping to the first item. Returns true if the index changed.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Go back by one, wrapping to the last item. Returns true if the index changed.
    pub fn prev(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: i64) -> bool {
        if self.len == 0 {
            return false;
        }
        let old = self.index;
        self.index = wrap(self.index as i64 + delta, self.len);
        self.index != old
    }

    /// Jump to a specific item, clamped into range. Returns true if the index changed.
    pub fn go_to(&mut self, index: i64) -> bool {
        if self.len == 0 {
            return false;
        }
        let old = self.index;
        self.index = clamp_index(index, self.len);
        self.index != old
    }

    /// Re-target the navigator at a (possibly new) sequence length and requested index.
    pub fn reset_to(&mut self, requested: i64, len: usize) {
        self.len = len;
        self.index = clamp_index(requested, len);
    }
}

fn clamp_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.clamp(0, len as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_negative_and_overflow() {
        assert_eq!(wrap(-1, 3), 2);
        assert_eq!(wrap(3, 3), 0);
        assert_eq!(wrap(-7, 3), 2);
        assert_eq!(wrap(10, 1), 0);
        assert_eq!(wrap(5, 0), 0);
    }

    #[test]
    fn test_next_is_circular() {
        for len in 1..6usize {
            for start in 0..len {
                let mut nav = Navigator::new(start as i64, len);
                for _ in 0..len {
                    nav.next();
                }
                assert_eq!(nav.index(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_prev_is_circular() {
        for len in 1..6usize {
            for start in 0..len {
                let mut nav = Navigator::new(start as i64, len);
                for _ in 0..len {
                    nav.prev();
                }
                assert_eq!(nav.index(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut nav = Navigator::new(0, 4);
        assert!(nav.prev());
        assert_eq!(nav.index(), Some(3));
    }

    #[test]
    fn test_single_item_navigation_is_noop() {
        let mut nav = Navigator::new(0, 1);
        assert!(!nav.next());
        assert!(!nav.prev());
        assert_eq!(nav.index(), Some(0));
    }

    #[test]
    fn test_empty_sequence_has_no_selection() {
        let mut nav = Navigator::new(3, 0);
        assert_eq!(nav.index(), None);
        assert!(!nav.next());
        assert!(!nav.prev());
        assert!(!nav.go_to(0));
        assert_eq!(nav.index(), None);
    }

    #[test]
    fn test_reset_to_clamps() {
        let mut nav = Navigator::default();
        for requested in [-100, -1, 0, 1, 2, 3, 5, i64::MAX, i64::MIN] {
            nav.reset_to(requested, 3);
            let index = nav.index().unwrap();
            assert!(index < 3, "requested={requested} gave {index}");
        }
        nav.reset_to(5, 3);
        assert_eq!(nav.index(), Some(2));
        nav.reset_to(-4, 3);
        assert_eq!(nav.index(), Some(0));
    }

    #[test]
    fn test_go_to_clamps_and_reports_change() {
        let mut nav = Navigator::new(0, 5);
        assert!(nav.go_to(3));
        assert_eq!(nav.index(), Some(3));
        assert!(!nav.go_to(3));
        assert!(nav.go_to(99));
        assert_eq!(nav.index(), Some(4));
    }
}
