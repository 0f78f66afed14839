//! Turn-alternation state machine.
//!
//! A `GameSession` owns the board and sequences validate, apply, evaluate
//! and turn flip for every accepted move. Rejected moves leave it untouched.

use super::rules;
use super::{
    Board, Cell, Command, Coord, Direction, LegalMove, Move, MoveError, Outcome, Phase, Side,
};
use tracing::{debug, info, instrument, warn};

/// A single game from a loaded board to its end.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    history: Vec<LegalMove>,
    initial_enemies: usize,
}

impl GameSession {
    /// Starts a session with the Musketeers to move.
    ///
    /// A board that is already decided starts in `Terminal`.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        let outcome = rules::evaluate(&board);
        let phase = if outcome.is_decisive() {
            info!(%outcome, "Loaded board is already decided");
            Phase::Terminal(outcome)
        } else {
            Phase::AwaitingMusketeerMove
        };

        Self {
            initial_enemies: board.count(Cell::Enemy),
            board,
            phase,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consumes the session, handing back the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move, or `None` once play has ended.
    pub fn to_move(&self) -> Option<Side> {
        self.phase.to_move()
    }

    /// Outcome so far (`Ongoing` for interrupted sessions too).
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::Ongoing,
        }
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[LegalMove] {
        &self.history
    }

    /// Enemy count when the session started.
    pub fn initial_enemies(&self) -> usize {
        self.initial_enemies
    }

    /// Every move the side to move could make right now.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.to_move()
            .map(|side| rules::legal_moves(&self.board, side))
            .unwrap_or_default()
    }

    /// Handles one player command.
    ///
    /// Returns the new phase. On error the phase, board and history are
    /// unchanged and the same side moves again.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit(&mut self, command: Command) -> Result<Phase, MoveError> {
        match command {
            Command::Interrupt => Ok(self.interrupt()),
            Command::Move { origin, direction } => self.play(origin, direction),
        }
    }

    /// Stops play early. A finished game stays finished.
    #[instrument(skip(self))]
    pub fn interrupt(&mut self) -> Phase {
        if self.phase.is_over() {
            debug!(phase = ?self.phase, "Interrupt ignored, session already over");
        } else {
            info!(moves = self.history.len(), "Session interrupted");
            self.phase = Phase::Interrupted;
        }
        self.phase
    }

    fn play(&mut self, origin: Coord, direction: Direction) -> Result<Phase, MoveError> {
        let side = self.to_move().ok_or_else(|| {
            warn!(phase = ?self.phase, "Move submitted after the game ended");
            MoveError::SessionClosed
        })?;

        let mv = Move::new(side, origin, direction);
        let legal = rules::validate(&self.board, &mv).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        // Work on a copy so a failed postcondition leaves the session as it was.
        let mut next = self.clone();
        next.advance(side, legal);

        #[cfg(debug_assertions)]
        next.check_invariants()?;

        *self = next;
        debug!(%mv, phase = ?self.phase, "Move applied");
        if let Phase::Terminal(outcome) = self.phase {
            info!(%outcome, moves = self.history.len(), "Game over");
        }
        Ok(self.phase)
    }

    fn advance(&mut self, side: Side, legal: LegalMove) {
        rules::apply(&mut self.board, &legal);
        self.history.push(legal);

        let outcome = rules::evaluate(&self.board);
        self.phase = if outcome.is_decisive() {
            Phase::Terminal(outcome)
        } else {
            Phase::awaiting(side.opponent())
        };
    }

    /// Postcondition check after an accepted move.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use super::invariants::{InvariantSet, SessionInvariants};

        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    /// Plays a sequence of commands from a starting board.
    ///
    /// Stops at the first rejected command.
    #[instrument(skip(board, commands))]
    pub fn replay(board: Board, commands: &[Command]) -> Result<Self, MoveError> {
        let mut session = Self::new(board);
        for command in commands {
            session.submit(*command)?;
        }
        Ok(session)
    }
}
