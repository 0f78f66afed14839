//! First-class action types for Three Musketeers.
//!
//! A `Command` is what a player typed, already resolved at the input
//! boundary. A `Move` is that command bound to the side whose turn it is,
//! and a `LegalMove` is a move the validator has accepted.

use super::{Cell, Coord, Direction, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// What a player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move the piece at `origin` one step in `direction`.
    Move {
        /// Square the piece starts on.
        origin: Coord,
        /// Direction of the step.
        direction: Direction,
    },
    /// Stop the game and save the board.
    Interrupt,
}

/// A proposed move by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Square the piece starts on.
    pub origin: Coord,
    /// Direction of the step.
    pub direction: Direction,
}

impl Move {
    /// Builds a move from raw indices, rejecting an off-board origin.
    pub fn at(side: Side, row: usize, col: usize, direction: Direction) -> Result<Self, MoveError> {
        let origin =
            Coord::new(row, col).map_err(|_| MoveError::OutOfBounds { row, col, direction })?;
        Ok(Self::new(side, origin, direction))
    }

    /// Destination square, or `None` when the step leaves the board.
    pub fn destination(&self) -> Option<Coord> {
        self.origin.step(self.direction)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}={}", self.side, self.origin, self.direction.letter())
    }
}

/// A move that passed validation, with its destination resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    /// The side making the move.
    pub side: Side,
    /// Square the piece leaves.
    pub origin: Coord,
    /// Square the piece lands on.
    pub destination: Coord,
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The origin or the destination is off the board.
    #[display(
        "Moving {:?} from row {}, column {} leaves the board",
        direction,
        row + 1,
        col + 1
    )]
    OutOfBounds {
        /// Origin row.
        row: usize,
        /// Origin column.
        col: usize,
        /// Requested direction.
        direction: Direction,
    },

    /// The origin does not hold the mover's own piece.
    #[display("No {:?} at {} for the {} to move", side.piece(), origin, side)]
    NoSuchPiece {
        /// The side that tried to move.
        side: Side,
        /// Requested origin.
        origin: Coord,
    },

    /// The destination does not hold what this side must move onto.
    #[display(
        "The {} cannot move onto {}: it holds {:?}, not {:?}",
        side,
        destination,
        found,
        side.required_destination()
    )]
    IllegalDestination {
        /// The side that tried to move.
        side: Side,
        /// Resolved destination.
        destination: Coord,
        /// What the destination actually holds.
        found: Cell,
    },

    /// The session is interrupted or finished.
    #[display("The game is already over")]
    SessionClosed,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
