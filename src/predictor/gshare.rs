//! A table of counters indexed by the program counter folded with global
//! history.

use crate::Outcome;
use crate::history::*;
use crate::predictor::*;

/// Folds the last `n` outcomes into the top `n` bits of an `m`-bit index.
/// The low `m - n` bits are taken from the program counter unchanged.
pub struct GsharePredictor {
    table: CounterTable,
    ghr: GlobalHistoryRegister,
}
impl GsharePredictor {
    pub fn new(index_bits: usize, history_bits: usize) -> Self {
        assert!(index_bits > 0 && index_bits <= MAX_INDEX_BITS);
        assert!(history_bits <= index_bits);
        Self {
            table: CounterTable::new(index_bits),
            ghr: GlobalHistoryRegister::new(history_bits),
        }
    }

    pub fn history(&self) -> &GlobalHistoryRegister { &self.ghr }
}

impl DirectionPredictor for GsharePredictor {
    fn name(&self) -> &'static str { "gshare" }

    fn index(&self, pc: usize) -> usize {
        let m = self.table.index_bits();
        let low_bits = m - self.ghr.len();
        let pc_bits = pc_index_bits(pc, m);

        let upper = pc_bits >> low_bits;
        let lower = pc_bits & ((1 << low_bits) - 1);
        let folded = upper ^ (self.ghr.value() & self.ghr.mask());
        (folded << low_bits) | lower
    }

    fn update(&mut self, pc: usize, outcome: Outcome) {
        // The index must be formed from history *before* this outcome
        let idx = self.index(pc);
        self.table.bump(idx, outcome);
        self.ghr.shift_in(outcome);
    }

    fn table(&self) -> &CounterTable { &self.table }
}
