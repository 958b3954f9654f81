//! Replaying a trace against a predictor.

use log::{debug, trace};
use crate::predictor::*;
use crate::stats::*;
use crate::trace::BranchRecord;
use crate::report::Report;

/// Drives a single [DirectionPredictor] over a sequence of branch records.
///
/// A simulator is used for exactly one run: the predictor and the
/// statistics are created fresh with it and consumed by [Simulator::into_report].
pub struct Simulator {
    cfg: PredictorConfig,
    predictor: Box<dyn DirectionPredictor>,
    stats: RunStats,
    branches: Option<BranchStats>,
}
impl Simulator {
    pub fn new(cfg: PredictorConfig) -> Result<Self, crate::ConfigError> {
        let predictor = cfg.build()?;
        Ok(Self {
            cfg,
            predictor,
            stats: RunStats::new(),
            branches: None,
        })
    }

    /// Also collect per-branch statistics during the run.
    pub fn with_branch_stats(mut self) -> Self {
        self.branches = Some(BranchStats::new());
        self
    }

    pub fn config(&self) -> &PredictorConfig { &self.cfg }
    pub fn predictor(&self) -> &dyn DirectionPredictor { self.predictor.as_ref() }
    pub fn stats(&self) -> &RunStats { &self.stats }
    pub fn branch_stats(&self) -> Option<&BranchStats> { self.branches.as_ref() }
    pub fn table(&self) -> &CounterTable { self.predictor.table() }

    /// Predict a single branch, then train the predictor with its outcome.
    pub fn step(&mut self, record: &BranchRecord) {
        let prediction = self.predictor.predict(record.pc);
        trace!("{:016x} predicted={} actual={}",
            record.pc, prediction, record.outcome);

        self.stats.update(record, prediction);
        if let Some(branches) = self.branches.as_mut() {
            branches.update(record, prediction);
        }
        self.predictor.update(record.pc, record.outcome);
    }

    /// Replay every record in order.
    pub fn run<I>(&mut self, records: I)
        where I: IntoIterator<Item = BranchRecord>
    {
        for record in records {
            self.step(&record);
        }
        debug!("{}: {} predictions, {} mispredictions",
            self.predictor.name(), self.stats.predictions,
            self.stats.mispredictions);
    }

    /// Like [Simulator::run], but stops at the first error produced by the
    /// record source.
    pub fn try_run<I, E>(&mut self, records: I) -> Result<(), E>
        where I: IntoIterator<Item = Result<BranchRecord, E>>
    {
        for record in records {
            self.step(&record?);
        }
        debug!("{}: {} predictions, {} mispredictions",
            self.predictor.name(), self.stats.predictions,
            self.stats.mispredictions);
        Ok(())
    }

    /// Finish the run, capturing the final statistics and table contents.
    pub fn into_report(self) -> Report {
        Report {
            cfg: self.cfg,
            stats: self.stats,
            table: self.predictor.table().entries().map(|(_, v)| v).collect(),
            trace_name: None,
        }
    }
}
