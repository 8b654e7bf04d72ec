//! Predictor Error Definitions.
//!
//! This module defines the error handling for the predictor suite. It provides:
//! 1. **Configuration Errors:** Rejected bit widths and scheme identifiers, raised before
//!    any table is allocated.
//! 2. **Misuse Errors:** Violations of the predict-then-train calling discipline, raised
//!    instead of silently corrupting predictor tables.

use thiserror::Error;

/// Errors raised while parsing or validating a predictor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A bit-width field consumed by the selected scheme was zero.
    #[error("{field} must be at least 1 bit")]
    ZeroBits {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A bit-width field is too wide to size a table safely.
    #[error("{field} = {bits} exceeds the maximum of {max} bits")]
    TooManyBits {
        /// Name of the offending field.
        field: &'static str,
        /// Configured width.
        bits: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// The scheme name is not one of static, gshare, tournament or custom.
    #[error("unknown prediction scheme '{0}'")]
    UnknownScheme(String),

    /// A scheme string carried the wrong number of parameters.
    #[error("malformed scheme '{0}' (expected static, gshare:<g>, tournament:<g>:<l>:<p> or custom)")]
    MalformedScheme(String),

    /// A numeric parameter could not be parsed.
    #[error("invalid value '{value}' for {field}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// The JSON document could not be deserialized.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the predictor facade.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// `predict` or `train` was called before `init`.
    #[error("predictor used before init")]
    NotInitialized,

    /// `init` rejected the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `predict` was called while a previous prediction was still awaiting `train`.
    #[error("branch at {pending:#010x} was predicted but never trained")]
    UnresolvedBranch {
        /// Address of the outstanding prediction.
        pending: u32,
    },

    /// `train` was called without a matching `predict`.
    #[error("train for {address:#010x} has no matching predict")]
    TrainWithoutPredict {
        /// Address passed to `train`.
        address: u32,
    },

    /// `train` was called for a different address than the outstanding `predict`.
    #[error("train for {found:#010x} does not match predicted branch {expected:#010x}")]
    AddressMismatch {
        /// Address passed to the outstanding `predict`.
        expected: u32,
        /// Address passed to `train`.
        found: u32,
    },
}
