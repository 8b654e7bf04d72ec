//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every direction
//! prediction scheme implements. The contract is two-phase: `predict` reads
//! the tables for a branch, and the matching `train` later folds the resolved
//! outcome back in.

use crate::common::Direction;

/// Trait for branch direction prediction algorithms.
///
/// `train` must be called for the same address as the preceding `predict`,
/// before any other branch is predicted. Implementations recompute their
/// table indices inside `train` from the history registers as they stood at
/// `predict` time and only shift the new outcome in as their final step, so
/// both phases observe identical indices.
pub trait BranchPredictor {
    /// Predicts the direction of the conditional branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction; only low-order bits are used.
    fn predict(&self, pc: u32) -> Direction;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction, identical to the one passed to `predict`.
    /// * `outcome` - The direction the branch actually took.
    fn train(&mut self, pc: u32, outcome: Direction);
}

/// Returns the number of entries in a table indexed by `bits` bits.
#[inline(always)]
pub(crate) const fn table_entries(bits: u32) -> usize {
    1 << bits
}

/// Returns the index mask for a `bits`-wide register.
#[inline(always)]
pub(crate) const fn mask(bits: u32) -> u32 {
    ((1u64 << bits) - 1) as u32
}

/// Shifts `outcome` into a `mask`-wide history register.
#[inline(always)]
pub(crate) const fn shift_in(history: u32, outcome: Direction, mask: u32) -> u32 {
    ((history << 1) | outcome.bit()) & mask
}
