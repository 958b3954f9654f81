//! A table of saturating counters shared by the direction predictors.

use crate::Outcome;
use crate::predictor::counter::*;

/// A table of `2^m` [Counter] entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTable {
    /// Table of counters
    data: Vec<Counter>,

    /// Number of index bits (m)
    index_bits: usize,
}
impl CounterTable {
    /// Create a table with `1 << index_bits` entries, each initialized to
    /// [Counter::INIT].
    pub fn new(index_bits: usize) -> Self {
        assert!(index_bits < usize::BITS as usize);
        Self {
            data: vec![Counter::default(); 1 << index_bits],
            index_bits,
        }
    }

    /// Returns the number of entries in the table.
    pub fn size(&self) -> usize { self.data.len() }

    /// Returns the number of bits used to index the table.
    pub fn index_bits(&self) -> usize { self.index_bits }

    /// Returns a bitmask corresponding to the number of entries in the table.
    pub fn index_mask(&self) -> usize {
        self.size() - 1
    }

    /// Read the counter at `idx`.
    ///
    /// Panics if `idx` is not a valid index.
    pub fn read(&self, idx: usize) -> Counter {
        assert!(idx < self.size(), "index {:#x} outside table of {} entries",
            idx, self.size());
        self.data[idx]
    }

    /// Move the counter at `idx` towards the observed outcome.
    pub fn bump(&mut self, idx: usize, outcome: Outcome) {
        let size = self.size();
        match self.data.get_mut(idx) {
            Some(ctr) => ctr.update(outcome),
            None => panic!("index {:#x} outside table of {} entries", idx, size),
        }
    }

    /// Iterate over `(index, value)` pairs in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.data.iter().map(Counter::value).enumerate()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_weakly_taken() {
        let t = CounterTable::new(3);
        assert_eq!(t.size(), 8);
        assert_eq!(t.index_mask(), 0b111);
        assert!(t.entries().all(|(_, v)| v == 2));
    }

    #[test]
    fn bump_only_touches_one_slot() {
        let mut t = CounterTable::new(2);
        t.bump(1, Outcome::T);
        t.bump(1, Outcome::T);
        t.bump(2, Outcome::N);
        let vals: Vec<(usize, u8)> = t.entries().collect();
        assert_eq!(vals, vec![(0, 2), (1, 3), (2, 1), (3, 2)]);
    }

    #[test]
    fn bump_saturates() {
        let mut t = CounterTable::new(1);
        for _ in 0..5 { t.bump(0, Outcome::N); }
        assert_eq!(t.read(0).value(), 0);
        for _ in 0..5 { t.bump(0, Outcome::T); }
        assert_eq!(t.read(0).value(), 3);
    }

    #[test]
    #[should_panic]
    fn read_out_of_range() {
        let t = CounterTable::new(2);
        t.read(4);
    }

    #[test]
    #[should_panic]
    fn bump_out_of_range() {
        let mut t = CounterTable::new(2);
        t.bump(4, Outcome::T);
    }
}
