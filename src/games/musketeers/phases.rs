//! Outcome and session phase types.

use super::Side;
use serde::{Deserialize, Serialize};

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won yet.
    Ongoing,
    /// No enemy is next to any Musketeer.
    MusketeersWin,
    /// All three Musketeers share a row or a column.
    EnemiesWin,
}

impl Outcome {
    /// Returns the winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Ongoing => None,
            Outcome::MusketeersWin => Some(Side::Musketeers),
            Outcome::EnemiesWin => Some(Side::Enemies),
        }
    }

    /// True once either side has won.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Game in progress"),
            Outcome::MusketeersWin => write!(f, "The Musketeers win!"),
            Outcome::EnemiesWin => write!(f, "Cardinal Richelieu's men win!"),
        }
    }
}

/// Where a session is in its lifecycle.
///
/// `Interrupted` and `Terminal` both end play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the Musketeers.
    AwaitingMusketeerMove,
    /// Waiting for the enemies.
    AwaitingEnemyMove,
    /// Stopped early by the interrupt command.
    Interrupted,
    /// A side has won.
    Terminal(Outcome),
}

impl Phase {
    /// The awaiting phase for a side.
    pub fn awaiting(side: Side) -> Self {
        match side {
            Side::Musketeers => Phase::AwaitingMusketeerMove,
            Side::Enemies => Phase::AwaitingEnemyMove,
        }
    }

    /// Side to move, or `None` once play has ended.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            Phase::AwaitingMusketeerMove => Some(Side::Musketeers),
            Phase::AwaitingEnemyMove => Some(Side::Enemies),
            Phase::Interrupted | Phase::Terminal(_) => None,
        }
    }

    /// True for `Interrupted` and `Terminal`.
    pub fn is_over(&self) -> bool {
        self.to_move().is_none()
    }
}
