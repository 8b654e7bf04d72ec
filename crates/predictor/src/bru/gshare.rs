//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `train()`: O(1)
//! - **Space Complexity:** O(2^N) where N is `ghistory_bits`
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length too short/long for pattern

use super::{
    BranchPredictor, SaturatingCounter,
    branch_predictor::{mask, shift_in, table_entries},
};
use crate::common::Direction;

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes (bit 0 = most recent).
    ghr: u32,
    /// Pattern History Table of 2-bit saturating counters.
    pht: Vec<SaturatingCounter>,
    /// Mask for both the GHR and PHT index.
    mask: u32,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor with a `2^history_bits` entry table.
    ///
    /// Counters start at `WeaklyNotTaken` and the history register at zero.
    /// `history_bits` must already be validated by
    /// [`Config::validate`](crate::config::Config::validate).
    pub fn new(history_bits: u32) -> Self {
        Self {
            ghr: 0,
            pht: vec![SaturatingCounter::default(); table_entries(history_bits)],
            mask: mask(history_bits),
        }
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// Computes the XOR of the PC and the Global History Register, keeping the
    /// low `history_bits` bits.
    #[inline(always)]
    pub fn index(&self, pc: u32) -> usize {
        ((pc ^ self.ghr) & self.mask) as usize
    }

    /// Returns the current Global History Register.
    pub const fn history(&self) -> u32 {
        self.ghr
    }

    /// Returns the counter stored at `index`, if in range.
    pub fn counter(&self, index: usize) -> Option<SaturatingCounter> {
        self.pht.get(index).copied()
    }

    /// Returns the full Pattern History Table.
    pub fn counters(&self) -> &[SaturatingCounter] {
        &self.pht
    }
}

impl BranchPredictor for GSharePredictor {
    /// Predicts taken if the counter at the hashed index is `WeaklyTaken` or above.
    fn predict(&self, pc: u32) -> Direction {
        self.pht[self.index(pc)].direction()
    }

    /// Updates the counter at the pre-update index, then shifts the outcome
    /// into the Global History Register.
    fn train(&mut self, pc: u32, outcome: Direction) {
        let idx = self.index(pc);
        self.pht[idx].update(outcome);
        self.ghr = shift_in(self.ghr, outcome, self.mask);
    }
}
