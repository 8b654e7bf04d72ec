//! Trace Replay Tests.
//!
//! Replays synthetic traces end to end and compares scheme accuracy.

use bpred_core::common::PredictorError;
use bpred_core::config::Scheme;
use bpred_core::sim::{BranchRecord, TraceReplayer, replay};
use bpred_core::{Config, Direction};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{alternating, loop_branch};

fn small(scheme: Scheme) -> Config {
    Config {
        scheme,
        ghistory_bits: 4,
        lhistory_bits: 4,
        pc_index_bits: 4,
        verbose: true,
    }
}

#[test]
fn replay_counts_every_branch() {
    let stats = replay(&Config::default(), alternating(0x40, 1000)).unwrap();
    assert_eq!(stats.branches, 1000);
    assert_eq!(stats.mispredictions, 500);
}

#[test]
fn replay_empty_trace() {
    let stats = replay(&Config::default(), Vec::new()).unwrap();
    assert_eq!(stats.branches, 0);
    assert_eq!(stats.mispredictions, 0);
}

#[test]
fn replay_rejects_invalid_config() {
    let config = Config {
        pc_index_bits: 0,
        ..Config::new(Scheme::Tournament)
    };
    let err = replay(&config, alternating(0x40, 10)).unwrap_err();
    assert!(matches!(err, PredictorError::Config(_)));
}

/// The dynamic schemes learn an alternating branch almost immediately.
#[rstest]
#[case(Scheme::GShare)]
#[case(Scheme::Tournament)]
#[case(Scheme::Custom)]
fn dynamic_schemes_learn_alternation(#[case] scheme: Scheme) {
    let stats = replay(&small(scheme), alternating(0x40, 1000)).unwrap();
    assert!(stats.mispredictions < 20, "{scheme}: {stats:?}");
}

/// A loop branch with a trip count of 8: static misses every exit, the dynamic
/// schemes learn the exit once history covers the loop.
#[rstest]
#[case(Scheme::GShare)]
#[case(Scheme::Tournament)]
#[case(Scheme::Custom)]
fn dynamic_schemes_beat_static_on_loops(#[case] scheme: Scheme) {
    let trace = loop_branch(0x400, 8, 4000);
    let baseline = replay(&Config::new(Scheme::Static), trace.clone()).unwrap();
    assert_eq!(baseline.mispredictions, 500);

    let config = Config {
        ghistory_bits: 10,
        lhistory_bits: 10,
        pc_index_bits: 10,
        ..Config::new(scheme)
    };
    let stats = replay(&config, trace).unwrap();
    assert!(stats.mispredictions < 50, "{scheme}: {stats:?}");
}

#[test]
fn replayer_step_reports_mispredictions() {
    let mut replayer = TraceReplayer::new(&Config::new(Scheme::Static)).unwrap();
    assert!(!replayer.step(BranchRecord::new(0x10, Direction::Taken)).unwrap());
    assert!(replayer.step(BranchRecord::new(0x10, Direction::NotTaken)).unwrap());

    assert_eq!(replayer.stats().branches, 2);
    assert_eq!(replayer.predictor().pending(), None);
    assert_eq!(replayer.finish().mispredictions, 1);
}
