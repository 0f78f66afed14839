//! Piece conservation invariants.

use super::super::{Cell, GameSession, MUSKETEER_COUNT, Side};
use super::Invariant;

/// Invariant: exactly three Musketeers are on the board.
pub struct MusketeerCountInvariant;

impl Invariant<GameSession> for MusketeerCountInvariant {
    fn holds(game: &GameSession) -> bool {
        game.board().count(Cell::Musketeer) == MUSKETEER_COUNT
    }

    fn description() -> &'static str {
        "Exactly three Musketeers are on the board"
    }
}

/// Invariant: enemies only disappear by capture.
///
/// The enemy count equals the starting count minus one per Musketeer move.
pub struct EnemyCountInvariant;

impl Invariant<GameSession> for EnemyCountInvariant {
    fn holds(game: &GameSession) -> bool {
        let captures = game
            .history()
            .iter()
            .filter(|m| m.side == Side::Musketeers)
            .count();
        game.initial_enemies().checked_sub(captures) == Some(game.board().count(Cell::Enemy))
    }

    fn description() -> &'static str {
        "Enemy count drops by one per capture and never otherwise"
    }
}
