//! Static Predictor Tests.

use bpred_core::Direction;
use bpred_core::bru::BranchPredictor;
use bpred_core::bru::static_bp::StaticPredictor;

use crate::common::train_n;

/// Static predictor always predicts taken.
#[test]
fn static_always_taken() {
    let bp = StaticPredictor::new();
    assert_eq!(bp.predict(0x1000), Direction::Taken);
    assert_eq!(bp.predict(u32::MAX), Direction::Taken);
}

/// Static predictor stays taken even after not-taken training.
#[test]
fn static_ignores_training() {
    let mut bp = StaticPredictor::new();
    let misses = train_n(&mut bp, 0x1000, Direction::NotTaken, 100);
    assert_eq!(misses, 100, "every not-taken branch is a miss");
    assert_eq!(bp.predict(0x1000), Direction::Taken);
}
