//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Instead of
//! saturating counters, each branch address selects a vector of signed 8-bit
//! weights. The prediction is the sign of the bias plus the dot product of the
//! weights and the global history in bipolar form (taken = +1, not taken = -1).
//!
//! Training follows the threshold rule: weights only move after a
//! misprediction or when the output magnitude is below [`THRESHOLD`]. A weight
//! whose update would leave the `i8` range keeps its old value.

use super::{BranchPredictor, branch_predictor::shift_in};
use crate::common::{
    Direction, HISTORY_LEN, NUM_PERCEPTRONS, THRESHOLD,
    constants::{HISTORY_MASK, PERCEPTRON_ROW},
};

/// One weight vector: bias at index 0, then one weight per history bit.
pub type WeightRow = [i8; PERCEPTRON_ROW];

/// Perceptron Predictor structure.
#[derive(Debug, Clone)]
pub struct PerceptronPredictor {
    /// Global History Register (`HISTORY_LEN` bits, bit 0 = most recent).
    ghr: u32,
    /// Table of weight vectors indexed by PC.
    table: Vec<WeightRow>,
}

impl Default for PerceptronPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerceptronPredictor {
    /// Creates a new Perceptron Predictor with all weights and history zeroed.
    pub fn new() -> Self {
        Self {
            ghr: 0,
            table: vec![[0; PERCEPTRON_ROW]; NUM_PERCEPTRONS],
        }
    }

    /// Selects the weight row for `pc`.
    #[inline(always)]
    pub const fn index(pc: u32) -> usize {
        pc as usize % NUM_PERCEPTRONS
    }

    /// Bipolar input for history bit `i`.
    #[inline(always)]
    fn input(&self, i: usize) -> i32 {
        if (self.ghr >> i) & 1 != 0 { 1 } else { -1 }
    }

    /// Computes the perceptron output for `pc` against the current history.
    ///
    /// Sums the bias weight and the product of each history input with its weight.
    pub fn output(&self, pc: u32) -> i32 {
        let row = &self.table[Self::index(pc)];
        let mut y = i32::from(row[0]);

        for i in 0..HISTORY_LEN {
            y += i32::from(row[i + 1]) * self.input(i);
        }
        y
    }

    /// Returns the weight row selected by `pc`.
    pub fn weights(&self, pc: u32) -> &WeightRow {
        &self.table[Self::index(pc)]
    }

    /// Returns the whole weight table.
    pub fn table(&self) -> &[WeightRow] {
        &self.table
    }

    /// Returns the current Global History Register.
    pub const fn history(&self) -> u32 {
        self.ghr
    }
}

/// Adds `delta` to `weight` unless the result would leave the `i8` range.
#[inline(always)]
fn nudge(weight: &mut i8, delta: i32) {
    if let Some(next) = i8::try_from(delta).ok().and_then(|d| weight.checked_add(d)) {
        *weight = next;
    }
}

impl BranchPredictor for PerceptronPredictor {
    /// Predicts taken if the perceptron output is non-negative.
    fn predict(&self, pc: u32) -> Direction {
        Direction::from(self.output(pc) >= 0)
    }

    /// Trains the weight row on a misprediction or a low-confidence output,
    /// then shifts the outcome into the Global History Register.
    fn train(&mut self, pc: u32, outcome: Direction) {
        let y = self.output(pc);
        let prediction = Direction::from(y >= 0);
        let t = outcome.sign();

        if prediction != outcome || y.abs() < THRESHOLD {
            let inputs: [i32; HISTORY_LEN] = std::array::from_fn(|i| self.input(i));
            let row = &mut self.table[Self::index(pc)];

            nudge(&mut row[0], t);
            for (w, x) in row[1..].iter_mut().zip(inputs) {
                nudge(w, t * x);
            }
        }

        self.ghr = shift_in(self.ghr, outcome, HISTORY_MASK);
    }
}
