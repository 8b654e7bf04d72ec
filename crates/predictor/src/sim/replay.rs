//! Replay loop: owns a predictor and its statistics side-by-side.

use crate::common::{Direction, PredictorError};
use crate::config::Config;
use crate::predictor::Predictor;
use crate::stats::PredictionStats;

/// One resolved conditional branch from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchRecord {
    /// Address of the branch instruction.
    pub address: u32,
    /// Direction the branch actually took.
    pub outcome: Direction,
}

impl BranchRecord {
    /// Creates a record.
    pub const fn new(address: u32, outcome: Direction) -> Self {
        Self { address, outcome }
    }
}

/// Replays branches through a predictor one at a time.
#[derive(Debug, Clone)]
pub struct TraceReplayer {
    predictor: Predictor,
    stats: PredictionStats,
}

impl TraceReplayer {
    /// Creates a replayer around a freshly initialized predictor.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Config`] if the configuration is rejected.
    pub fn new(config: &Config) -> Result<Self, PredictorError> {
        Ok(Self {
            predictor: Predictor::with_config(config)?,
            stats: PredictionStats::new(),
        })
    }

    /// Predicts, records, and trains one branch. Returns `true` on a misprediction.
    ///
    /// # Errors
    ///
    /// Propagates call-discipline errors from the predictor; none occur when
    /// branches are only fed through this method.
    pub fn step(&mut self, record: BranchRecord) -> Result<bool, PredictorError> {
        let predicted = self.predictor.predict(record.address)?;
        self.predictor.train(record.address, record.outcome)?;
        Ok(self.stats.record(predicted, record.outcome))
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &PredictionStats {
        &self.stats
    }

    /// The underlying predictor.
    pub const fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    /// Consumes the replayer, returning its statistics.
    pub fn finish(self) -> PredictionStats {
        self.stats
    }
}

/// Replays `records` through a new predictor built from `config`.
///
/// # Errors
///
/// Returns [`PredictorError::Config`] if the configuration is rejected.
pub fn replay<I>(config: &Config, records: I) -> Result<PredictionStats, PredictorError>
where
    I: IntoIterator<Item = BranchRecord>,
{
    let mut replayer = TraceReplayer::new(config)?;
    for record in records {
        let _ = replayer.step(record)?;
    }
    Ok(replayer.finish())
}
