//! Predictor Facade.
//!
//! The facade is the surface a trace-replay harness drives. It provides:
//! 1. **Initialization:** Validates a [`Config`] and builds the tables for its scheme.
//! 2. **Dispatch:** Routes `predict` and `train` to the active scheme.
//! 3. **Call Discipline:** Tracks the outstanding prediction so every `train`
//!    pairs with exactly one `predict` for the same address. Violations are
//!    reported as [`PredictorError`]s and leave the tables untouched.

use tracing::{debug, trace, warn};

use crate::bru::{BranchPredictor, BranchPredictorWrapper};
use crate::common::{Direction, PredictorError};
use crate::config::{Config, Scheme};

/// A prediction awaiting its resolved outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBranch {
    /// Address passed to `predict`.
    pub address: u32,
    /// Direction that was predicted.
    pub predicted: Direction,
}

#[derive(Debug, Clone)]
struct Active {
    config: Config,
    unit: BranchPredictorWrapper,
    pending: Option<PendingBranch>,
}

/// Branch predictor for a single trace.
///
/// All predictor state lives in this value; independent traces each use
/// their own instance.
///
/// # Examples
///
/// ```
/// use bpred_core::{Config, Direction, Predictor, config::Scheme};
///
/// let mut predictor = Predictor::new();
/// predictor.init(&Config::new(Scheme::Static)).unwrap();
///
/// assert_eq!(predictor.predict(0x400).unwrap(), Direction::Taken);
/// predictor.train(0x400, Direction::NotTaken).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    active: Option<Active>,
}

impl Predictor {
    /// Creates an uninitialized predictor. Call [`Predictor::init`] before use.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Creates a predictor and initializes it with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Config`] if the configuration is rejected.
    pub fn with_config(config: &Config) -> Result<Self, PredictorError> {
        let mut predictor = Self::new();
        predictor.init(config)?;
        Ok(predictor)
    }

    /// Validates `config` and allocates freshly reset tables for its scheme.
    ///
    /// Re-initializing discards all learned state.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Config`] if a bit width consumed by the
    /// scheme is zero or too large. The predictor is left unchanged.
    pub fn init(&mut self, config: &Config) -> Result<(), PredictorError> {
        config.validate()?;

        let unit = BranchPredictorWrapper::new(config);
        debug!(
            scheme = %config.scheme,
            ghistory_bits = config.ghistory_bits,
            lhistory_bits = config.lhistory_bits,
            pc_index_bits = config.pc_index_bits,
            "predictor initialized"
        );

        self.active = Some(Active {
            config: config.clone(),
            unit,
            pending: None,
        });
        Ok(())
    }

    /// Predicts the direction of the branch at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::NotInitialized`] before `init`, and
    /// [`PredictorError::UnresolvedBranch`] if the previous prediction has not
    /// been trained yet.
    pub fn predict(&mut self, address: u32) -> Result<Direction, PredictorError> {
        let active = self.active.as_mut().ok_or(PredictorError::NotInitialized)?;
        if let Some(pending) = active.pending {
            return Err(PredictorError::UnresolvedBranch {
                pending: pending.address,
            });
        }

        let predicted = active.unit.predict(address);
        active.pending = Some(PendingBranch { address, predicted });
        Ok(predicted)
    }

    /// Predicts like [`Predictor::predict`] but never fails: any error is
    /// logged and the branch is predicted not taken.
    pub fn predict_or_default(&mut self, address: u32) -> Direction {
        self.predict(address).unwrap_or_else(|err| {
            warn!(address = format_args!("{address:#010x}"), %err, "defaulting to not taken");
            Direction::NotTaken
        })
    }

    /// Trains the predictor with the resolved `outcome` of the branch at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::NotInitialized`] before `init`,
    /// [`PredictorError::TrainWithoutPredict`] if no prediction is outstanding, and
    /// [`PredictorError::AddressMismatch`] if `address` differs from the outstanding
    /// prediction. In every error case the tables are not modified.
    pub fn train(&mut self, address: u32, outcome: Direction) -> Result<(), PredictorError> {
        let active = self.active.as_mut().ok_or(PredictorError::NotInitialized)?;
        let pending = active
            .pending
            .ok_or(PredictorError::TrainWithoutPredict { address })?;
        if pending.address != address {
            return Err(PredictorError::AddressMismatch {
                expected: pending.address,
                found: address,
            });
        }

        active.unit.train(address, outcome);
        active.pending = None;

        if active.config.verbose {
            trace!(
                address = format_args!("{address:#010x}"),
                predicted = %pending.predicted,
                outcome = %outcome,
                miss = pending.predicted != outcome,
                "branch resolved"
            );
        }
        Ok(())
    }

    /// Returns `true` once [`Predictor::init`] has succeeded.
    pub const fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> Option<&Config> {
        self.active.as_ref().map(|a| &a.config)
    }

    /// Returns the active scheme.
    pub fn scheme(&self) -> Option<Scheme> {
        self.active.as_ref().map(|a| a.unit.scheme())
    }

    /// Returns the outstanding prediction, if any.
    pub fn pending(&self) -> Option<PendingBranch> {
        self.active.as_ref().and_then(|a| a.pending)
    }

    /// Returns the active scheme's predictor for inspection.
    pub fn unit(&self) -> Option<&BranchPredictorWrapper> {
        self.active.as_ref().map(|a| &a.unit)
    }
}
