//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the direction prediction schemes: static (always
//! taken), gshare, tournament, and perceptron, plus the two-bit saturating
//! counter the table-based schemes share.

pub use self::{branch_predictor::BranchPredictor, counter::SaturatingCounter};

/// Branch predictor trait and common functionality.
pub mod branch_predictor;

/// Two-bit saturating counter.
pub mod counter;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

/// Perceptron-based neural branch predictor.
pub mod perceptron;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use self::{
    gshare::GSharePredictor,
    perceptron::PerceptronPredictor,
    static_bp::StaticPredictor,
    tournament::{TournamentGeometry, TournamentPredictor},
};
use crate::common::Direction;
use crate::config::{Config, Scheme};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Each variant owns only the state its scheme needs; the static scheme owns none.
#[derive(Debug, Clone)]
pub enum BranchPredictorWrapper {
    /// Always taken.
    Static(StaticPredictor),
    /// Global history XOR PC.
    GShare(GSharePredictor),
    /// Local/global hybrid.
    Tournament(TournamentPredictor),
    /// Perceptron (the `Custom` scheme).
    Perceptron(PerceptronPredictor),
}

impl BranchPredictorWrapper {
    /// Creates a new branch predictor wrapper based on configuration.
    ///
    /// Allocates and resets the tables for `config.scheme` only. The
    /// configuration must already have passed [`Config::validate`].
    pub fn new(config: &Config) -> Self {
        match config.scheme {
            Scheme::Static => Self::Static(StaticPredictor::new()),
            Scheme::GShare => Self::GShare(GSharePredictor::new(config.ghistory_bits)),
            Scheme::Tournament => Self::Tournament(TournamentPredictor::new(TournamentGeometry {
                ghistory_bits: config.ghistory_bits,
                lhistory_bits: config.lhistory_bits,
                pc_index_bits: config.pc_index_bits,
            })),
            Scheme::Custom => Self::Perceptron(PerceptronPredictor::new()),
        }
    }

    /// Returns the scheme this predictor implements.
    pub const fn scheme(&self) -> Scheme {
        match self {
            Self::Static(_) => Scheme::Static,
            Self::GShare(_) => Scheme::GShare,
            Self::Tournament(_) => Scheme::Tournament,
            Self::Perceptron(_) => Scheme::Custom,
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn predict(&self, pc: u32) -> Direction {
        match self {
            Self::Static(bp) => bp.predict(pc),
            Self::GShare(bp) => bp.predict(pc),
            Self::Tournament(bp) => bp.predict(pc),
            Self::Perceptron(bp) => bp.predict(pc),
        }
    }

    #[inline(always)]
    fn train(&mut self, pc: u32, outcome: Direction) {
        match self {
            Self::Static(bp) => bp.train(pc, outcome),
            Self::GShare(bp) => bp.train(pc, outcome),
            Self::Tournament(bp) => bp.train(pc, outcome),
            Self::Perceptron(bp) => bp.train(pc, outcome),
        }
    }
}
