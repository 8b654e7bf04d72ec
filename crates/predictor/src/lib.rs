//! Branch direction predictor library.
//!
//! This crate models the direction-prediction logic of a CPU branch predictor with the following:
//! 1. **Schemes:** Static (always taken), gshare, tournament, and perceptron predictors
//!    sharing a two-phase predict/train contract.
//! 2. **Facade:** A configuration-driven [`Predictor`] that owns the active scheme's tables
//!    and enforces the predict-then-train calling discipline.
//! 3. **Configuration:** Scheme selection and table widths from JSON or a compact string.
//! 4. **Replay:** A trace replay loop and misprediction statistics.

/// Branch prediction unit: the individual schemes and the saturating counter.
pub mod bru;
/// Common types and constants (direction, perceptron geometry, errors).
pub mod common;
/// Predictor configuration (defaults, scheme enum, parsing, validation).
pub mod config;
/// Predictor facade driven by the trace harness.
pub mod predictor;
/// Trace replay loop.
pub mod sim;
/// Misprediction statistics collection and reporting.
pub mod stats;

/// Resolved or predicted branch direction.
pub use crate::common::Direction;
/// Root configuration type; use `Config::default()`, `Config::from_json`, or parse a scheme string.
pub use crate::config::Config;
/// Predictor facade; construct with `Predictor::new` and call `init`.
pub use crate::predictor::Predictor;
