//! Static Branch Predictor.
//!
//! Implements the "Always Taken" policy for conditional branches. It keeps no
//! history and serves as the accuracy baseline for the dynamic schemes.

use super::BranchPredictor;
use crate::common::Direction;

/// Static Branch Predictor structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub const fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    /// Always predicts taken.
    fn predict(&self, _pc: u32) -> Direction {
        Direction::Taken
    }

    /// Does nothing; the static policy never learns.
    fn train(&mut self, _pc: u32, _outcome: Direction) {}
}
