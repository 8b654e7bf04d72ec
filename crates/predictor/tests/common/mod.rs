//! Shared helpers for predictor tests.

use bpred_core::Direction;
use bpred_core::bru::BranchPredictor;
use bpred_core::sim::BranchRecord;

/// Feeds `n` resolved branches with a constant outcome, predicting before each train.
///
/// Returns the number of mispredictions.
pub fn train_n<P: BranchPredictor>(bp: &mut P, pc: u32, outcome: Direction, n: usize) -> usize {
    let mut misses = 0;
    for _ in 0..n {
        if bp.predict(pc) != outcome {
            misses += 1;
        }
        bp.train(pc, outcome);
    }
    misses
}

/// A single branch alternating taken/not-taken, starting with taken.
pub fn alternating(pc: u32, len: usize) -> Vec<BranchRecord> {
    (0..len)
        .map(|i| BranchRecord::new(pc, Direction::from(i % 2 == 0)))
        .collect()
}

/// A loop-closing branch: `trip - 1` taken iterations followed by one not-taken exit.
pub fn loop_branch(pc: u32, trip: usize, len: usize) -> Vec<BranchRecord> {
    (0..len)
        .map(|i| BranchRecord::new(pc, Direction::from(i % trip != trip - 1)))
        .collect()
}
