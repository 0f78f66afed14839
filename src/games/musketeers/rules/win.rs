//! Win detection logic for Three Musketeers.

use super::super::{Board, Cell, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// The Musketeer check runs first and wins a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if musketeers_win(board) {
        Outcome::MusketeersWin
    } else if enemies_win(board) {
        Outcome::EnemiesWin
    } else {
        Outcome::Ongoing
    }
}

/// True when no Musketeer has an enemy on any orthogonal neighbour.
#[instrument(skip(board))]
pub fn musketeers_win(board: &Board) -> bool {
    board
        .musketeers()
        .into_iter()
        .flat_map(|m| m.neighbours())
        .all(|n| board.cell(n) != Cell::Enemy)
}

/// True when all three Musketeers share a row or a column.
#[instrument(skip(board))]
pub fn enemies_win(board: &Board) -> bool {
    let musketeers = board.musketeers();
    let [first, rest @ ..] = musketeers.as_slice() else {
        return false;
    };
    if rest.len() != 2 {
        return false;
    }

    rest.iter().all(|m| m.row() == first.row()) || rest.iter().all(|m| m.col() == first.col())
}
