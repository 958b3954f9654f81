//! A table of counters indexed only by the program counter.

use crate::Outcome;
use crate::predictor::*;

pub struct BimodalPredictor {
    table: CounterTable,
}
impl BimodalPredictor {
    pub fn new(index_bits: usize) -> Self {
        assert!(index_bits > 0 && index_bits <= MAX_INDEX_BITS);
        Self { table: CounterTable::new(index_bits) }
    }
}

impl DirectionPredictor for BimodalPredictor {
    fn name(&self) -> &'static str { "bimodal" }

    fn index(&self, pc: usize) -> usize {
        pc_index_bits(pc, self.table.index_bits())
    }

    fn update(&mut self, pc: usize, outcome: Outcome) {
        let idx = self.index(pc);
        self.table.bump(idx, outcome);
    }

    fn table(&self) -> &CounterTable { &self.table }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_ignores_history() {
        let mut p = BimodalPredictor::new(2);
        let before: Vec<usize> = (0..64).map(|pc| p.index(pc)).collect();
        p.update(0x10, Outcome::T);
        p.update(0x14, Outcome::N);
        let after: Vec<usize> = (0..64).map(|pc| p.index(pc)).collect();
        assert_eq!(before, after);
        assert_eq!(p.index(0x0), 0);
        assert_eq!(p.index(0x4), 1);
        assert_eq!(p.index(0x8), 2);
        assert_eq!(p.index(0xc), 3);
        assert_eq!(p.index(0x10), 0);
    }

    #[test]
    fn learns_not_taken() {
        let mut p = BimodalPredictor::new(4);
        assert_eq!(p.predict(0x400), Outcome::T);
        p.update(0x400, Outcome::N);
        assert_eq!(p.predict(0x400), Outcome::N);
        assert_eq!(p.table().read(p.index(0x400)).value(), 1);
        // A different slot is unaffected
        assert_eq!(p.predict(0x404), Outcome::T);
    }
}
