//! Predictor Constants.
//!
//! This module defines the fixed geometry shared by the predictor schemes. It includes:
//! 1. **Table Sizing:** The upper bound on configured table index widths.
//! 2. **Perceptron Geometry:** Table size, history length, and training threshold.
//! 3. **Weight Range:** The signed 8-bit bounds every perceptron weight lives in.

/// Largest accepted table index width in bits.
///
/// Configured widths above this are rejected before any table is allocated,
/// which keeps `1 << bits` well inside `u32` and bounds the largest table
/// (the tournament local history table) to 64 MiB.
pub const MAX_TABLE_BITS: u32 = 24;

/// Number of weight vectors in the perceptron table.
pub const NUM_PERCEPTRONS: usize = 256;

/// Global history length seen by the perceptron, in bits.
pub const HISTORY_LEN: usize = 28;

/// Length of a perceptron weight row (bias followed by one weight per history bit).
pub const PERCEPTRON_ROW: usize = HISTORY_LEN + 1;

/// Training threshold: weights are also trained on correct predictions whose
/// output magnitude falls below this value.
pub const THRESHOLD: i32 = 50;

/// Mask applied to the perceptron history register.
pub const HISTORY_MASK: u32 = (1 << HISTORY_LEN) - 1;

/// Smallest representable perceptron weight.
pub const WEIGHT_MIN: i8 = i8::MIN;

/// Largest representable perceptron weight.
pub const WEIGHT_MAX: i8 = i8::MAX;
