//! Branch Direction.
//!
//! This module defines the resolved or predicted direction of a conditional branch.
//! The direction is used for the following:
//! 1. **Prediction Output:** Every scheme answers a lookup with a `Direction`.
//! 2. **Training Input:** The resolved outcome fed back through `train`.
//! 3. **History Encoding:** Shifted into history registers as a single bit (Taken = 1).

use std::{fmt, ops::Not};

/// Direction of a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The branch falls through.
    NotTaken,
    /// The branch jumps to its target.
    Taken,
}

impl Direction {
    /// Returns the history bit for this direction (Taken = 1, NotTaken = 0).
    #[inline(always)]
    pub const fn bit(self) -> u32 {
        match self {
            Self::Taken => 1,
            Self::NotTaken => 0,
        }
    }

    /// Returns the bipolar encoding used by the perceptron (Taken = +1, NotTaken = -1).
    #[inline(always)]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Taken => 1,
            Self::NotTaken => -1,
        }
    }

    /// Returns `true` if the direction is [`Direction::Taken`].
    #[inline(always)]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl From<bool> for Direction {
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Direction> for bool {
    fn from(dir: Direction) -> Self {
        dir.is_taken()
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Taken => Self::NotTaken,
            Self::NotTaken => Self::Taken,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "T"),
            Self::NotTaken => write!(f, "N"),
        }
    }
}
