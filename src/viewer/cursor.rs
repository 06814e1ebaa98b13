//! Bounded step cursor
//!
//! [`StepCursor`] is the only place the step clamp invariant is enforced:
//! `index < len` and `len >= 1` hold after every operation. Out-of-range
//! requests are clamped, never rejected.

/// Index into a non-empty step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    /// Cursor at step 0 over `len` steps (treated as 1 when zero)
    pub fn new(len: usize) -> Self {
        StepCursor {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.len
    }

    fn last(&self) -> usize {
        self.len - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last()
    }

    /// Saturating increment
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1).min(self.last());
        self.index
    }

    /// Saturating decrement
    pub fn previous(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Move to `target`, clamped into `[0, len)`
    pub fn jump_to(&mut self, target: i64) -> usize {
        self.index = if target <= 0 {
            0
        } else {
            usize::try_from(target)
                .unwrap_or(usize::MAX)
                .min(self.last())
        };
        self.index
    }

    pub fn reset(&mut self) -> usize {
        self.index = 0;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_is_treated_as_one() {
        let mut cursor = StepCursor::new(0);
        assert_eq!(cursor.total(), 1);
        assert_eq!(cursor.next(), 0);
        assert!(cursor.is_first() && cursor.is_last());
    }

    #[test]
    fn test_next_saturates_at_last_step() {
        let mut cursor = StepCursor::new(3);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.next(), 2);
        assert_eq!(cursor.next(), 2);
        assert!(cursor.is_last());
    }

    #[test]
    fn test_previous_saturates_at_zero() {
        let mut cursor = StepCursor::new(3);
        assert_eq!(cursor.previous(), 0);
        cursor.jump_to(2);
        assert_eq!(cursor.previous(), 1);
        assert_eq!(cursor.previous(), 0);
        assert_eq!(cursor.previous(), 0);
    }

    #[test]
    fn test_jump_to_clamps_extremes() {
        let mut cursor = StepCursor::new(6);
        assert_eq!(cursor.jump_to(99), 5);
        assert_eq!(cursor.jump_to(-3), 0);
        assert_eq!(cursor.jump_to(i64::MAX), 5);
        assert_eq!(cursor.jump_to(i64::MIN), 0);
        assert_eq!(cursor.jump_to(3), 3);
    }

    #[test]
    fn test_reset() {
        let mut cursor = StepCursor::new(4);
        cursor.jump_to(3);
        assert_eq!(cursor.reset(), 0);
        assert!(cursor.is_first());
    }
}
