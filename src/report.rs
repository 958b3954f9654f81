//! Formatting the results of a run.

use std::fmt;
use crate::predictor::{PredictorConfig, PredictorKind};
use crate::stats::RunStats;

/// The final state of a run: statistics and the contents of the counter table.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub cfg: PredictorConfig,
    pub stats: RunStats,

    /// Final counter values, in index order.
    pub table: Vec<u8>,

    /// Name of the trace, printed in the command line echo.
    pub trace_name: Option<String>,
}
impl Report {
    pub fn with_trace_name(mut self, name: impl ToString) -> Self {
        self.trace_name = Some(name.to_string());
        self
    }

    fn fmt_command(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "./bpsim {} {}", self.cfg.kind, self.cfg.index_bits)?;
        if self.cfg.kind == PredictorKind::Gshare {
            write!(f, " {}", self.cfg.history_bits)?;
        }
        if let Some(name) = &self.trace_name {
            write!(f, " {}", name)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "COMMAND")?;
        self.fmt_command(f)?;

        writeln!(f, "OUTPUT")?;
        writeln!(f, "number of predictions:\t\t{}", self.stats.predictions)?;
        writeln!(f, "number of mispredictions:\t{}", self.stats.mispredictions)?;
        match self.stats.misprediction_rate() {
            Some(rate) => writeln!(f, "misprediction rate:\t\t{:.2}%", rate)?,
            None => writeln!(f, "misprediction rate:\t\tundefined")?,
        }

        let title = match self.cfg.kind {
            PredictorKind::Bimodal => "BIMODAL",
            PredictorKind::Gshare => "GSHARE",
        };
        writeln!(f, "FINAL {} CONTENTS", title)?;
        for (idx, val) in self.table.iter().enumerate() {
            writeln!(f, "{}\t{}", idx, val)?;
        }
        Ok(())
    }
}
