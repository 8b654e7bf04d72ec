//! Predictor Facade Tests.
//!
//! Verifies scheme dispatch, table initialization, and the predict-then-train
//! call discipline enforced by the facade.

use bpred_core::bru::{BranchPredictorWrapper, SaturatingCounter};
use bpred_core::common::{ConfigError, PredictorError};
use bpred_core::config::Scheme;
use bpred_core::predictor::PendingBranch;
use bpred_core::{Config, Direction, Predictor};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn gshare(bits: u32) -> Predictor {
    let config = Config {
        ghistory_bits: bits,
        ..Config::new(Scheme::GShare)
    };
    Predictor::with_config(&config).unwrap()
}

fn step(p: &mut Predictor, pc: u32, outcome: Direction) -> Direction {
    let predicted = p.predict(pc).unwrap();
    p.train(pc, outcome).unwrap();
    predicted
}

// ══════════════════════════════════════════════════════════
// 1. Initialization and dispatch
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(Scheme::Static)]
#[case(Scheme::GShare)]
#[case(Scheme::Tournament)]
#[case(Scheme::Custom)]
fn init_builds_selected_scheme(#[case] scheme: Scheme) {
    let config = Config {
        ghistory_bits: 6,
        lhistory_bits: 6,
        pc_index_bits: 6,
        ..Config::new(scheme)
    };
    let p = Predictor::with_config(&config).unwrap();
    assert!(p.is_initialized());
    assert_eq!(p.scheme(), Some(scheme));
    assert_eq!(p.config(), Some(&config));

    let matches_variant = matches!(
        (scheme, p.unit()),
        (Scheme::Static, Some(BranchPredictorWrapper::Static(_)))
            | (Scheme::GShare, Some(BranchPredictorWrapper::GShare(_)))
            | (Scheme::Tournament, Some(BranchPredictorWrapper::Tournament(_)))
            | (Scheme::Custom, Some(BranchPredictorWrapper::Perceptron(_)))
    );
    assert!(matches_variant);
}

#[rstest]
#[case(Scheme::Static, Direction::Taken)]
#[case(Scheme::GShare, Direction::NotTaken)]
#[case(Scheme::Tournament, Direction::NotTaken)]
#[case(Scheme::Custom, Direction::Taken)]
fn first_prediction_per_scheme(#[case] scheme: Scheme, #[case] expected: Direction) {
    let mut p = Predictor::with_config(&Config::new(scheme)).unwrap();
    assert_eq!(p.predict(0x1234_5678).unwrap(), expected);
}

#[test]
fn init_rejects_invalid_config_and_stays_uninitialized() {
    let mut p = Predictor::new();
    let config = Config {
        ghistory_bits: 0,
        ..Config::new(Scheme::GShare)
    };
    let err = p.init(&config).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::Config(ConfigError::ZeroBits {
            field: "ghistory_bits"
        })
    ));
    assert!(!p.is_initialized());
}

#[test]
fn reinit_discards_learned_state() {
    let mut p = gshare(4);
    for _ in 0..8 {
        let _ = step(&mut p, 0, Direction::Taken);
    }
    assert_eq!(p.predict(0).unwrap(), Direction::Taken);

    p.init(&Config {
        ghistory_bits: 4,
        ..Config::new(Scheme::GShare)
    })
    .unwrap();
    assert_eq!(p.pending(), None);
    assert_eq!(p.predict(0).unwrap(), Direction::NotTaken);
}

// ══════════════════════════════════════════════════════════
// 2. Call discipline
// ══════════════════════════════════════════════════════════

#[test]
fn predict_before_init_fails() {
    let mut p = Predictor::new();
    assert!(matches!(p.predict(0x10), Err(PredictorError::NotInitialized)));
}

#[test]
fn train_before_init_fails() {
    let mut p = Predictor::default();
    assert!(matches!(
        p.train(0x10, Direction::Taken),
        Err(PredictorError::NotInitialized)
    ));
}

#[test]
fn predict_or_default_falls_back_to_not_taken() {
    let mut p = Predictor::new();
    assert_eq!(p.predict_or_default(0x10), Direction::NotTaken);

    // A static predictor with an unresolved branch also falls back.
    let mut p = Predictor::with_config(&Config::new(Scheme::Static)).unwrap();
    assert_eq!(p.predict_or_default(0x10), Direction::Taken);
    assert_eq!(p.predict_or_default(0x14), Direction::NotTaken);
}

#[test]
fn train_without_predict_fails() {
    let mut p = gshare(4);
    let err = p.train(0x40, Direction::Taken).unwrap_err();
    assert!(matches!(err, PredictorError::TrainWithoutPredict { address: 0x40 }));
}

#[test]
fn second_predict_before_train_fails() {
    let mut p = gshare(4);
    let _ = p.predict(0x40).unwrap();
    let err = p.predict(0x44).unwrap_err();
    assert!(matches!(err, PredictorError::UnresolvedBranch { pending: 0x40 }));
}

/// A mismatched train is rejected without touching the tables; the pending
/// branch can still be trained afterwards.
#[test]
fn mismatched_train_is_rejected_without_side_effects() {
    let mut p = gshare(4);
    let predicted = p.predict(0x3).unwrap();

    let err = p.train(0x7, Direction::Taken).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::AddressMismatch {
            expected: 0x3,
            found: 0x7
        }
    ));
    assert_eq!(
        err.to_string(),
        "train for 0x00000007 does not match predicted branch 0x00000003"
    );

    let Some(BranchPredictorWrapper::GShare(bp)) = p.unit() else {
        panic!("expected gshare");
    };
    assert_eq!(bp.history(), 0);
    assert!(bp.counters().iter().all(|&c| c == SaturatingCounter::WeaklyNotTaken));
    assert_eq!(
        p.pending(),
        Some(PendingBranch {
            address: 0x3,
            predicted
        })
    );

    p.train(0x3, Direction::Taken).unwrap();
    assert_eq!(p.pending(), None);
}

// ══════════════════════════════════════════════════════════
// 3. End to end
// ══════════════════════════════════════════════════════════

/// ghistory_bits = 2: history 0 predicts not-taken; four taken outcomes
/// saturate the steady-state entry and it predicts taken from then on.
#[test]
fn gshare_two_bit_end_to_end() {
    let mut p = gshare(2);
    assert_eq!(step(&mut p, 0, Direction::Taken), Direction::NotTaken);
    for _ in 0..3 {
        let _ = step(&mut p, 0, Direction::Taken);
    }

    let Some(BranchPredictorWrapper::GShare(bp)) = p.unit() else {
        panic!("expected gshare");
    };
    assert_eq!(bp.history(), 0b11);
    assert_eq!(bp.counter(bp.index(0)), Some(SaturatingCounter::StronglyTaken));

    for _ in 0..4 {
        assert_eq!(step(&mut p, 0, Direction::Taken), Direction::Taken);
    }
}

/// Perceptron with empty history and zero weights: output 0 → taken.
#[test]
fn perceptron_zero_state_predicts_taken() {
    for pc in [0, 1, 0xFF, 0x100, u32::MAX] {
        let mut p = Predictor::with_config(&Config::new(Scheme::Custom)).unwrap();
        assert_eq!(p.predict(pc).unwrap(), Direction::Taken);
    }
}

/// Two predictors never share state.
#[test]
fn instances_are_independent() {
    let mut a = gshare(4);
    let mut b = gshare(4);
    for _ in 0..8 {
        let _ = step(&mut a, 0, Direction::Taken);
    }
    assert_eq!(a.predict(0).unwrap(), Direction::Taken);
    assert_eq!(b.predict(0).unwrap(), Direction::NotTaken);
}

#[test]
fn predictor_is_send() {
    fn assert_send<T: Send + 'static>() {}
    assert_send::<Predictor>();
}
