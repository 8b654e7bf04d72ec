//! Two-bit Saturating Counter.
//!
//! The counter is the confidence-weighted building block of the gshare and
//! tournament tables. It moves one state per update and sticks at either end
//! instead of wrapping.

use crate::common::Direction;

/// Two-bit saturating counter state.
///
/// The upper half of the range predicts taken.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SaturatingCounter {
    /// Strongly not taken (0).
    StronglyNotTaken = 0,
    /// Weakly not taken (1). Reset value for every predictor table.
    #[default]
    WeaklyNotTaken = 1,
    /// Weakly taken (2).
    WeaklyTaken = 2,
    /// Strongly taken (3).
    StronglyTaken = 3,
}

impl SaturatingCounter {
    /// Moves one state toward `StronglyTaken`, saturating at the top.
    #[inline(always)]
    #[must_use]
    pub const fn increment(self) -> Self {
        match self {
            Self::StronglyNotTaken => Self::WeaklyNotTaken,
            Self::WeaklyNotTaken => Self::WeaklyTaken,
            Self::WeaklyTaken | Self::StronglyTaken => Self::StronglyTaken,
        }
    }

    /// Moves one state toward `StronglyNotTaken`, saturating at the bottom.
    #[inline(always)]
    #[must_use]
    pub const fn decrement(self) -> Self {
        match self {
            Self::StronglyTaken => Self::WeaklyTaken,
            Self::WeaklyTaken => Self::WeaklyNotTaken,
            Self::WeaklyNotTaken | Self::StronglyNotTaken => Self::StronglyNotTaken,
        }
    }

    /// Returns the predicted direction: taken for `WeaklyTaken` and above.
    #[inline(always)]
    pub const fn direction(self) -> Direction {
        if (self as u8) >= (Self::WeaklyTaken as u8) {
            Direction::Taken
        } else {
            Direction::NotTaken
        }
    }

    /// Trains the counter in place toward `outcome`.
    #[inline(always)]
    pub fn update(&mut self, outcome: Direction) {
        *self = match outcome {
            Direction::Taken => self.increment(),
            Direction::NotTaken => self.decrement(),
        };
    }

    /// Returns the raw two-bit value.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8
    }
}
