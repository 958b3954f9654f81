//! Helpers for collecting statistics.

use std::collections::*;
use crate::Outcome;
use crate::trace::BranchRecord;
use bitvec::prelude::*;
use itertools::*;

/// Counts accumulated over a single simulation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of predictions made
    pub predictions: usize,

    /// Number of predictions that disagreed with the actual outcome
    pub mispredictions: usize,
}
impl RunStats {
    pub fn new() -> Self { Self::default() }

    /// Record a single prediction.
    pub fn update(&mut self, record: &BranchRecord, prediction: Outcome) {
        if prediction != record.outcome {
            self.mispredictions += 1;
        }
        self.predictions += 1;
    }

    /// Return the number of correct predictions.
    pub fn hits(&self) -> usize { self.predictions - self.mispredictions }

    /// Return the misprediction rate as a percentage.
    ///
    /// Returns `None` when no predictions were made, since the rate is
    /// undefined for an empty run.
    pub fn misprediction_rate(&self) -> Option<f64> {
        if self.predictions == 0 {
            return None;
        }
        Some(self.mispredictions as f64 / self.predictions as f64 * 100.0)
    }
}

/// Container for recording per-branch statistics during a run.
#[derive(Clone, Debug, Default)]
pub struct BranchStats {
    /// Per-branch statistics (indexed by program counter value).
    pub data: BTreeMap<usize, BranchData>,
}
impl BranchStats {
    pub fn new() -> Self {
        Self { data: BTreeMap::new() }
    }

    /// Update per-branch statistics.
    pub fn update(&mut self, record: &BranchRecord, prediction: Outcome) {
        let hit = prediction == record.outcome;
        let data = self.get_mut(record.pc);
        data.occ += 1;
        data.pat.push(record.outcome.into());
        if hit { data.hits += 1; }
    }

    /// Returns a reference to data collected for a particular branch.
    pub fn get(&self, pc: usize) -> Option<&BranchData> {
        self.data.get(&pc)
    }

    /// Returns a mutable reference to data collected for a particular branch.
    /// Creates a new entry if one doesn't already exist.
    pub fn get_mut(&mut self, pc: usize) -> &mut BranchData {
        self.data.entry(pc).or_default()
    }

    /// Returns the number of unique observed branch instructions.
    pub fn num_unique_branches(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of branches that are always taken
    pub fn num_always_taken(&self) -> usize {
        self.data.values().filter(|s| s.is_always_taken()).count()
    }

    /// Returns the number of branches that are never taken
    pub fn num_never_taken(&self) -> usize {
        self.data.values().filter(|s| s.is_never_taken()).count()
    }

    /// Returns the 'n' most frequently executed branches.
    pub fn get_common_branches(&self, n: usize) -> Vec<(usize, &BranchData)> {
        self.data.iter()
            .sorted_by(|x, y| y.1.occ.cmp(&x.1.occ).then(x.0.cmp(y.0)))
            .take(n)
            .map(|(pc, s)| (*pc, s))
            .collect()
    }

    /// Returns the 'n' most frequently executed branches which are seen more
    /// than 'min_occ' times and predicted correctly at most 'max_rate' of
    /// the time.
    pub fn get_low_rate_branches(&self, n: usize, min_occ: usize,
        max_rate: f64) -> Vec<(usize, &BranchData)>
    {
        self.data.iter()
            .filter(|(_, s)| s.occ > min_occ && s.hit_rate() <= max_rate)
            .sorted_by(|x, y| y.1.occ.cmp(&x.1.occ).then(x.0.cmp(y.0)))
            .take(n)
            .map(|(pc, s)| (*pc, s))
            .collect()
    }
}

/// Container for statistics about a single branch.
#[derive(Clone, Debug, Default)]
pub struct BranchData {
    /// Number of times this branch was encountered.
    pub occ: usize,

    /// Number of correct predictions for this branch.
    pub hits: usize,

    /// Record of all observed outcomes for this branch.
    pub pat: BitVec,
}
impl BranchData {
    /// Return the hit rate for this branch.
    pub fn hit_rate(&self) -> f64 {
        self.hits as f64 / self.occ as f64
    }

    pub fn is_always_taken(&self) -> bool {
        self.pat.count_ones() == self.pat.len()
    }

    pub fn is_never_taken(&self) -> bool {
        self.pat.count_zeros() == self.pat.len()
    }

    pub fn times_taken(&self) -> usize {
        self.pat.count_ones()
    }

    /// Format the most recent 'limit' outcomes, oldest first.
    pub fn recent_pattern(&self, limit: usize) -> String {
        let start = self.pat.len().saturating_sub(limit);
        self.pat[start..].iter().by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect()
    }

    // NOTE: Remember that this isn't too useful apart from telling you
    // whether some sequence of outcomes is mixed or uniform.
    pub fn shannon_entropy(&self) -> f64 {
        let n   = self.pat.len() as f64;
        let p_t = self.pat.count_ones() as f64 / n;
        let p_f = self.pat.count_zeros() as f64 / n;

        let res = -(p_t * p_t.log2() + p_f * p_f.log2());
        if res.is_nan() { 0.0 } else { res }
    }
}
