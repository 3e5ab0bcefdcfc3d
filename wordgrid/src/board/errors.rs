//! Errors used by the `Board`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Position;

/// Reason why a tile could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The requested letter is not present in the letter supply.
    #[error("the letter is not available in the supply")]
    LetterUnavailable,
}

/// Error caused when attempting to place a tile that could not be placed.
/// The board is unchanged when this is returned.
#[derive(Error)]
#[error("could not place {letter:?} at {position:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    position: Position,
    letter: char,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, position, and letter.
    pub(super) fn new(reason: CannotPlaceReason, position: Position, letter: char) -> Self {
        Self {
            reason,
            position,
            letter,
        }
    }

    /// Get the reason placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the position where placement was attempted.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the letter that was not placed.
    pub fn letter(&self) -> char {
        self.letter
    }
}
