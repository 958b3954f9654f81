//! Implementations of different branch direction predictors.

pub mod counter;
pub mod table;
pub mod bimodal;
pub mod gshare;

pub use counter::*;
pub use table::*;
pub use bimodal::*;
pub use gshare::*;

use crate::Outcome;
use crate::error::ConfigError;
use log::debug;

/// The largest supported number of index bits (m).
pub const MAX_INDEX_BITS: usize = 28;

/// Select `index_bits` bits from a program counter value, discarding the two
/// low bits (always zero for word-aligned instructions).
pub fn pc_index_bits(pc: usize, index_bits: usize) -> usize {
    (pc >> 2) & ((1 << index_bits) - 1)
}

/// Interface to a predictor whose state is a [CounterTable] and which is
/// only subject to change by the correct branch outcome.
pub trait DirectionPredictor {
    fn name(&self) -> &'static str;

    /// Given a program counter value, return the corresponding index into
    /// the table. Depends on the current state of the predictor.
    fn index(&self, pc: usize) -> usize;

    /// Return the predicted outcome for the branch at `pc`.
    fn predict(&self, pc: usize) -> Outcome {
        self.table().read(self.index(pc)).predict()
    }

    /// Update the internal state of the predictor with the correct outcome.
    fn update(&mut self, pc: usize, outcome: Outcome);

    /// Returns a reference to the table of counters.
    fn table(&self) -> &CounterTable;
}

/// The kinds of predictor that can be built from a [PredictorConfig].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredictorKind {
    Bimodal,
    Gshare,
}
impl PredictorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bimodal => "bimodal",
            Self::Gshare => "gshare",
        }
    }
}
impl std::fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for building a [DirectionPredictor].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictorConfig {
    pub kind: PredictorKind,

    /// Number of program counter bits used to index the table (m).
    pub index_bits: usize,

    /// Number of global history bits (n). Ignored by bimodal predictors.
    pub history_bits: usize,
}
impl PredictorConfig {
    pub fn bimodal(index_bits: usize) -> Self {
        Self { kind: PredictorKind::Bimodal, index_bits, history_bits: 0 }
    }

    pub fn gshare(index_bits: usize, history_bits: usize) -> Self {
        Self { kind: PredictorKind::Gshare, index_bits, history_bits }
    }

    /// Check the bit widths before anything is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_bits == 0 {
            return Err(ConfigError::ZeroIndexBits);
        }
        if self.index_bits > MAX_INDEX_BITS {
            return Err(ConfigError::IndexBitsTooLarge(self.index_bits));
        }
        if self.kind == PredictorKind::Gshare
            && self.history_bits > self.index_bits
        {
            return Err(ConfigError::HistoryTooLong {
                history_bits: self.history_bits,
                index_bits: self.index_bits,
            });
        }
        Ok(())
    }

    /// Returns the number of bits of predictor state.
    pub fn storage_bits(&self) -> usize {
        let history = match self.kind {
            PredictorKind::Bimodal => 0,
            PredictorKind::Gshare => self.history_bits,
        };
        (2 << self.index_bits) + history
    }

    pub fn build(self) -> Result<Box<dyn DirectionPredictor>, ConfigError> {
        self.validate()?;
        debug!("building {} predictor (m={}, n={}, {} bits of state)",
            self.kind, self.index_bits, self.history_bits,
            self.storage_bits());
        let p: Box<dyn DirectionPredictor> = match self.kind {
            PredictorKind::Bimodal => {
                Box::new(BimodalPredictor::new(self.index_bits))
            },
            PredictorKind::Gshare => {
                Box::new(GsharePredictor::new(
                    self.index_bits, self.history_bits
                ))
            },
        };
        Ok(p)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(PredictorConfig::bimodal(0).validate(),
            Err(ConfigError::ZeroIndexBits));
        assert_eq!(PredictorConfig::bimodal(MAX_INDEX_BITS + 1).validate(),
            Err(ConfigError::IndexBitsTooLarge(MAX_INDEX_BITS + 1)));
        assert_eq!(PredictorConfig::gshare(4, 5).validate(),
            Err(ConfigError::HistoryTooLong { history_bits: 5, index_bits: 4 }));
        assert!(PredictorConfig::gshare(4, 4).validate().is_ok());
        assert!(PredictorConfig::gshare(4, 0).validate().is_ok());
        assert!(PredictorConfig::bimodal(12).validate().is_ok());
    }

    #[test]
    fn build_selects_kind() {
        let p = PredictorConfig::bimodal(3).build().unwrap();
        assert_eq!(p.name(), "bimodal");
        assert_eq!(p.table().size(), 8);

        let p = PredictorConfig::gshare(5, 2).build().unwrap();
        assert_eq!(p.name(), "gshare");
        assert_eq!(p.table().size(), 32);

        assert!(PredictorConfig::gshare(2, 3).build().is_err());
    }

    #[test]
    fn pc_bits() {
        assert_eq!(pc_index_bits(0x0000_0000, 4), 0);
        assert_eq!(pc_index_bits(0x0000_0004, 4), 1);
        assert_eq!(pc_index_bits(0x0000_0007, 4), 1);
        assert_eq!(pc_index_bits(0x0000_003c, 4), 0xf);
        assert_eq!(pc_index_bits(0x0000_0040, 4), 0);
    }

    #[test]
    fn storage() {
        assert_eq!(PredictorConfig::bimodal(4).storage_bits(), 32);
        assert_eq!(PredictorConfig::gshare(4, 3).storage_bits(), 35);
    }
}
