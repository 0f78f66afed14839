//! Move validation and execution.

use super::super::{Board, Cell, Coord, Direction, LegalMove, Move, MoveError, Side};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Checks a move against the board.
///
/// The destination, one step away, must be on the board; then the origin
/// must hold the mover's piece and the destination must hold an enemy
/// (Musketeer move) or nothing (enemy move).
#[instrument(skip(board), fields(mv = %mv))]
pub fn validate(board: &Board, mv: &Move) -> Result<LegalMove, MoveError> {
    let side = mv.side;
    let origin = mv.origin;

    let destination = mv.destination().ok_or(MoveError::OutOfBounds {
        row: origin.row(),
        col: origin.col(),
        direction: mv.direction,
    })?;

    if board.cell(origin) != side.piece() {
        debug!(found = ?board.cell(origin), "Origin does not hold the mover's piece");
        return Err(MoveError::NoSuchPiece { side, origin });
    }

    let found = board.cell(destination);
    if found != side.required_destination() {
        debug!(?found, %destination, "Destination not allowed");
        return Err(MoveError::IllegalDestination {
            side,
            destination,
            found,
        });
    }

    Ok(LegalMove {
        side,
        origin,
        destination,
    })
}

/// Applies a validated move in place.
///
/// The origin empties and the destination takes the mover's piece, so a
/// Musketeer move removes the captured enemy.
#[instrument(skip(board))]
pub fn apply(board: &mut Board, legal: &LegalMove) {
    board.put(legal.origin, Cell::Empty);
    board.put(legal.destination, legal.side.piece());
}

/// Every legal move for a side, origins in row-major order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, side: Side) -> Vec<LegalMove> {
    Coord::all()
        .filter(|&origin| board.cell(origin) == side.piece())
        .flat_map(|origin| {
            Direction::iter().map(move |direction| Move::new(side, origin, direction))
        })
        .filter_map(|mv| validate(board, &mv).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("test board")
    }

    fn mv(side: Side, row: usize, col: usize, direction: Direction) -> Move {
        Move::new(side, Coord::new(row, col).unwrap(), direction)
    }

    const CORNERS: &str = "M o . . M\n\
                           o . . . .\n\
                           . . . . .\n\
                           o . . . .\n\
                           M . . . .\n";

    #[test]
    fn test_musketeer_captures_adjacent_enemy() {
        let b = board(CORNERS);
        let legal = validate(&b, &mv(Side::Musketeers, 0, 0, Direction::Right)).unwrap();
        assert_eq!(legal.destination, Coord::new(0, 1).unwrap());
    }

    #[test]
    fn test_musketeer_cannot_move_to_empty() {
        let b = board(CORNERS);
        assert!(matches!(
            validate(&b, &mv(Side::Musketeers, 0, 4, Direction::Down)),
            Err(MoveError::IllegalDestination {
                found: Cell::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_musketeer_off_board() {
        let b = board(CORNERS);
        assert!(matches!(
            validate(&b, &mv(Side::Musketeers, 0, 0, Direction::Up)),
            Err(MoveError::OutOfBounds { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_bounds_checked_before_piece() {
        let b = board(CORNERS);
        assert!(matches!(
            validate(&b, &mv(Side::Enemies, 0, 0, Direction::Up)),
            Err(MoveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_wrong_piece_rejected() {
        let b = board(CORNERS);
        assert!(matches!(
            validate(&b, &mv(Side::Enemies, 0, 0, Direction::Down)),
            Err(MoveError::NoSuchPiece {
                side: Side::Enemies,
                ..
            })
        ));
        assert!(matches!(
            validate(&b, &mv(Side::Musketeers, 2, 2, Direction::Down)),
            Err(MoveError::NoSuchPiece { .. })
        ));
    }

    #[test]
    fn test_enemy_moves_only_onto_empty() {
        let b = board(CORNERS);
        assert!(validate(&b, &mv(Side::Enemies, 1, 0, Direction::Down)).is_ok());
        assert!(matches!(
            validate(&b, &mv(Side::Enemies, 1, 0, Direction::Up)),
            Err(MoveError::IllegalDestination {
                found: Cell::Musketeer,
                ..
            })
        ));
    }

    #[test]
    fn test_apply_capture_removes_enemy() {
        let mut b = board(CORNERS);
        let enemies = b.count(Cell::Enemy);
        let legal = validate(&b, &mv(Side::Musketeers, 0, 0, Direction::Down)).unwrap();
        apply(&mut b, &legal);
        assert_eq!(b.get(0, 0), Ok(Cell::Empty));
        assert_eq!(b.get(1, 0), Ok(Cell::Musketeer));
        assert_eq!(b.count(Cell::Musketeer), 3);
        assert_eq!(b.count(Cell::Enemy), enemies - 1);
    }

    #[test]
    fn test_apply_enemy_move_conserves_count() {
        let mut b = board(CORNERS);
        let enemies = b.count(Cell::Enemy);
        let legal = validate(&b, &mv(Side::Enemies, 3, 0, Direction::Right)).unwrap();
        apply(&mut b, &legal);
        assert_eq!(b.get(3, 1), Ok(Cell::Enemy));
        assert_eq!(b.get(3, 0), Ok(Cell::Empty));
        assert_eq!(b.count(Cell::Enemy), enemies);
    }

    #[test]
    fn test_legal_moves_for_both_sides() {
        let b = board(CORNERS);
        let musketeer_moves = legal_moves(&b, Side::Musketeers);
        // A1 -> B1, A1 -> A2, E1 -> D1
        assert_eq!(musketeer_moves.len(), 3);
        assert!(musketeer_moves.iter().all(|m| b.cell(m.destination) == Cell::Enemy));

        let enemy_moves = legal_moves(&b, Side::Enemies);
        assert!(enemy_moves.iter().all(|m| b.cell(m.destination) == Cell::Empty));
        assert!(!enemy_moves.is_empty());
    }
}
