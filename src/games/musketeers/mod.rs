//! Three Musketeers: board, rules, session state machine and move notation.

mod action;
pub mod invariants;
mod notation;
mod phases;
pub mod rules;
mod session;
mod types;

pub use action::{Command, LegalMove, Move, MoveError};
pub use notation::{INTERRUPT_SENTINEL, ParseError, parse_command};
pub use phases::{Outcome, Phase};
pub use session::GameSession;
pub use types::{BOARD_SIZE, Board, BoardError, Cell, Coord, Direction, MUSKETEER_COUNT, Side};
