//! Branch prediction unit tests.




/// Static predictor.
pub mod static_bp;
