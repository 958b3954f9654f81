//! Implementation of a 2-bit saturating counter.

use crate::Outcome;

/// A 2-bit saturating counter used to follow the behavior of a branch.
///
/// States 0 and 1 predict not-taken, states 2 and 3 predict taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter(u8);
impl Counter {
    /// The largest representable state ("strongly taken").
    pub const MAX: u8 = 3;

    /// The state every counter starts in ("weakly taken").
    pub const INIT: u8 = 2;

    pub fn new(state: u8) -> Self {
        assert!(state <= Self::MAX, "counter state {} out of range", state);
        Self(state)
    }

    /// Return the raw counter state.
    pub fn value(&self) -> u8 { self.0 }

    /// Return the predicted direction.
    pub fn predict(&self) -> Outcome {
        Outcome::from(self.0 >= Self::INIT)
    }

    pub fn inc(&mut self) {
        if self.0 < Self::MAX { self.0 += 1; }
    }

    pub fn dec(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Move the counter towards the observed outcome.
    pub fn update(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::T => self.inc(),
            Outcome::N => self.dec(),
        }
    }
}
impl Default for Counter {
    fn default() -> Self { Self(Self::INIT) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn saturates_at_both_ends() {
        for c in 0..=Counter::MAX {
            let mut up = Counter::new(c);
            up.update(Outcome::T);
            assert_eq!(up.value(), (c + 1).min(3));

            let mut down = Counter::new(c);
            down.update(Outcome::N);
            assert_eq!(down.value(), c.saturating_sub(1));
        }
    }

    #[test]
    fn prediction_threshold() {
        assert_eq!(Counter::new(0).predict(), Outcome::N);
        assert_eq!(Counter::new(1).predict(), Outcome::N);
        assert_eq!(Counter::new(2).predict(), Outcome::T);
        assert_eq!(Counter::new(3).predict(), Outcome::T);
        assert_eq!(Counter::default().value(), 2);
    }

    #[test]
    #[should_panic]
    fn rejects_wide_state() {
        Counter::new(4);
    }
}
