
use bitvec::prelude::*;

/// A register holding the most recent `len` branch outcomes.
///
/// Bit `len - 1` is the newest outcome and bit 0 is the oldest one still
/// being tracked. All bits are initialized to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalHistoryRegister {
    data: BitVec<usize, Lsb0>,
    len: usize,
}

// NOTE: This *reverses* the all of the bits and presents them in a format
// where the leftmost bit is the most-significant (index n) and the rightmost
// bit is the least-significant (index 0).
impl std::fmt::Display for GlobalHistoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let x: String = self.data.as_bitslice().iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .rev()
            .collect();
        write!(f, "{}", x)
    }
}

impl GlobalHistoryRegister {
    /// Create a register with the specified length in bits.
    pub fn new(len: usize) -> Self {
        assert!(len <= usize::BITS as usize);
        Self {
            data: bitvec![usize, Lsb0; 0; len],
            len,
        }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn data(&self) -> &BitSlice<usize, Lsb0> { &self.data }

    /// Return a mask covering all bits of the register.
    pub fn mask(&self) -> usize {
        if self.len == usize::BITS as usize { !0 } else { (1 << self.len) - 1 }
    }

    /// Return the contents of the register as an integer.
    pub fn value(&self) -> usize {
        if self.data.is_empty() {
            return 0;
        }
        self.data.load_le::<usize>()
    }

    /// Shift the register right by one bit and insert `outcome` as the new
    /// most-significant bit. The oldest bit (bit 0) is discarded.
    pub fn shift_in(&mut self, outcome: crate::Outcome) {
        if self.is_empty() {
            return;
        }
        self.data.remove(0);
        self.data.push(outcome.into());
    }

    /// Clear all bits in the register.
    pub fn clear(&mut self) {
        self.data.fill(false);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Outcome;

    #[test]
    fn newest_outcome_enters_at_the_top() {
        let mut ghr = GlobalHistoryRegister::new(4);
        assert_eq!(ghr.value(), 0);
        ghr.shift_in(Outcome::T);
        assert_eq!(ghr.value(), 0b1000);
        ghr.shift_in(Outcome::N);
        assert_eq!(ghr.value(), 0b0100);
        ghr.shift_in(Outcome::T);
        assert_eq!(ghr.value(), 0b1010);
        assert_eq!(ghr.to_string(), "1010");
    }

    #[test]
    fn matches_integer_shift() {
        let pattern = [true, true, false, true, false, false, true, true, true];
        for n in 1..=5 {
            let mut ghr = GlobalHistoryRegister::new(n);
            let mut expected: usize = 0;
            for &taken in pattern.iter() {
                ghr.shift_in(taken.into());
                expected = ((expected >> 1) | ((taken as usize) << (n - 1)))
                    & ((1 << n) - 1);
                assert_eq!(ghr.value(), expected);
            }
        }
    }

    #[test]
    fn empty_register_stays_zero() {
        let mut ghr = GlobalHistoryRegister::new(0);
        ghr.shift_in(Outcome::T);
        assert_eq!(ghr.value(), 0);
        assert_eq!(ghr.mask(), 0);
        assert!(ghr.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut ghr = GlobalHistoryRegister::new(3);
        ghr.shift_in(Outcome::T);
        ghr.clear();
        assert_eq!(ghr.value(), 0);
    }
}
