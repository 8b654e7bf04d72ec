//! Common types and constants shared by every predictor scheme.
//!
//! This module provides the small vocabulary the rest of the crate is written in:
//! 1. **Direction:** The taken/not-taken value predicted and trained on.
//! 2. **Constants:** Perceptron geometry and table sizing limits.
//! 3. **Error Handling:** Configuration and misuse error types.

/// Fixed predictor geometry and sizing limits.
pub mod constants;

/// Branch direction type.
pub mod direction;

/// Error types.
pub mod error;

pub use constants::{HISTORY_LEN, MAX_TABLE_BITS, NUM_PERCEPTRONS, THRESHOLD};
pub use direction::Direction;
pub use error::{ConfigError, PredictorError};
