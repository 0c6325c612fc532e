//! Interval constraints on how many cards of each suit a seat can hold.
//!
//! Hands are not dealt up front: the engine learns a card's owner the first
//! time it is played. Two independent rules tighten the intervals:
//! registering a card raises the lower bound, and failing to follow the led
//! suit collapses the upper bound onto the lower. A later registration that
//! pushes the lower bound past the upper is the contradiction that exposes an
//! earlier revoke.

use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lower bound rose past the upper bound for some (seat, suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("suit length lower bound exceeds upper bound")]
pub struct BoundsContradiction;

/// Inclusive interval on a single seat's length in a single suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    min: u8,
    max: u8,
}

impl LengthBounds {
    pub const fn unconstrained() -> Self {
        Self { min: 0, max: 13 }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Raises the lower bound after a card of the suit is registered to the
    /// seat.
    pub fn note_registered(&mut self) -> Result<(), BoundsContradiction> {
        self.min += 1;
        if self.min > self.max {
            Err(BoundsContradiction)
        } else {
            Ok(())
        }
    }

    /// Collapses the upper bound onto the lower after the seat failed to
    /// follow the suit: it holds no cards of the suit beyond those already
    /// registered.
    pub fn mark_exhausted(&mut self) {
        self.max = self.min;
    }
}

/// The 4x4 table of intervals, one per (seat, suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsTable {
    cells: [[LengthBounds; 4]; 4],
}

impl BoundsTable {
    pub fn new() -> Self {
        Self {
            cells: [[LengthBounds::unconstrained(); 4]; 4],
        }
    }

    pub fn get(&self, seat: Seat, suit: Suit) -> LengthBounds {
        self.cells[seat.index()][suit.index()]
    }

    pub fn note_registered(&mut self, seat: Seat, suit: Suit) -> Result<(), BoundsContradiction> {
        self.cells[seat.index()][suit.index()].note_registered()
    }

    pub fn mark_exhausted(&mut self, seat: Seat, suit: Suit) {
        self.cells[seat.index()][suit.index()].mark_exhausted();
    }
}

impl Default for BoundsTable {
    fn default() -> Self {
        Self::new()
    }
}
