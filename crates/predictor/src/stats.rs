//! Prediction statistics collection and reporting.
//!
//! Tallies resolved branches and mispredictions for a replayed trace and
//! derives the misprediction rate.

use std::fmt;

use crate::common::Direction;

/// Prediction statistics for one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionStats {
    /// Number of conditional branches resolved.
    pub branches: u64,
    /// Number of branches whose prediction differed from the outcome.
    pub mispredictions: u64,
}

impl PredictionStats {
    /// Creates an empty tally.
    pub const fn new() -> Self {
        Self {
            branches: 0,
            mispredictions: 0,
        }
    }

    /// Records one resolved branch. Returns `true` if it was mispredicted.
    pub fn record(&mut self, predicted: Direction, outcome: Direction) -> bool {
        let miss = predicted != outcome;
        self.branches += 1;
        if miss {
            self.mispredictions += 1;
        }
        miss
    }

    /// Number of correctly predicted branches.
    pub const fn correct(&self) -> u64 {
        self.branches - self.mispredictions
    }

    /// Misprediction rate in percent; zero for an empty trace.
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * self.mispredictions as f64 / self.branches as f64
        }
    }

    /// Prediction accuracy in percent; zero for an empty trace.
    pub fn accuracy(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 - self.misprediction_rate()
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branches:        {:10}", self.branches)?;
        writeln!(f, "Incorrect:       {:10}", self.mispredictions)?;
        write!(f, "Misprediction Rate: {:10.4}", self.misprediction_rate())
    }
}
