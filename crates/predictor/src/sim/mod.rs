//! Trace replay.
//!
//! Drives a [`Predictor`](crate::Predictor) over a stream of resolved branches,
//! pairing every prediction with its training call and tallying the results.

/// Branch records and the replay loop.
pub mod replay;

pub use replay::{BranchRecord, TraceReplayer, replay};
