//! Alternating turn invariant: Musketeers, enemies, Musketeers, ...

use super::super::{GameSession, Side};
use super::Invariant;

/// Invariant: sides alternate, Musketeers first.
///
/// While play continues, the side to move must match the parity of the
/// history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(game: &GameSession) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.side != Side::Musketeers
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].side == w[1].side) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Side::Musketeers
        } else {
            Side::Enemies
        };

        game.phase().to_move().is_none_or(|side| side == expected_next)
    }

    fn description() -> &'static str {
        "Sides alternate turns (Musketeers, enemies, Musketeers, ...)"
    }
}
