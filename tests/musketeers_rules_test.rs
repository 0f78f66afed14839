//! Tests for move validation, execution and win evaluation.

use three_musketeers::rules::{apply, enemies_win, evaluate, legal_moves, validate};
use three_musketeers::{Board, Cell, Coord, Direction, Move, MoveError, Outcome, Side};

const MIDGAME: &str = "o . o o M\n\
                       o o M . o\n\
                       . o o . o\n\
                       o . . o .\n\
                       M o . o o\n";

fn board(text: &str) -> Board {
    text.parse().expect("test board")
}

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[test]
fn test_musketeer_move_accepted_iff_captures_enemy() {
    let b = board(MIDGAME);
    for origin in Coord::all() {
        for direction in ALL_DIRECTIONS {
            let mv = Move::new(Side::Musketeers, origin, direction);
            let expected = b.cell(origin) == Cell::Musketeer
                && origin
                    .step(direction)
                    .is_some_and(|d| b.cell(d) == Cell::Enemy);
            assert_eq!(validate(&b, &mv).is_ok(), expected, "{mv}");
        }
    }
}

#[test]
fn test_enemy_move_accepted_iff_destination_empty() {
    let b = board(MIDGAME);
    for origin in Coord::all() {
        for direction in ALL_DIRECTIONS {
            let mv = Move::new(Side::Enemies, origin, direction);
            let expected = b.cell(origin) == Cell::Enemy
                && origin
                    .step(direction)
                    .is_some_and(|d| b.cell(d) == Cell::Empty);
            assert_eq!(validate(&b, &mv).is_ok(), expected, "{mv}");
        }
    }
}

#[test]
fn test_error_kinds_are_distinct() {
    let b = board(MIDGAME);
    let off_board = Move::new(Side::Musketeers, Coord::new(0, 4).unwrap(), Direction::Right);
    let no_piece = Move::new(Side::Musketeers, Coord::new(0, 0).unwrap(), Direction::Down);
    let blocked = Move::new(Side::Musketeers, Coord::new(1, 2).unwrap(), Direction::Right);

    let errors = [
        validate(&b, &off_board).unwrap_err(),
        validate(&b, &no_piece).unwrap_err(),
        validate(&b, &blocked).unwrap_err(),
    ];
    assert!(matches!(errors[0], MoveError::OutOfBounds { .. }));
    assert!(matches!(errors[1], MoveError::NoSuchPiece { .. }));
    assert!(matches!(errors[2], MoveError::IllegalDestination { .. }));

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert_ne!(messages[0], messages[2]);
}

#[test]
fn test_off_board_origin_rejected() {
    assert!(matches!(
        Move::at(Side::Enemies, 5, 0, Direction::Up),
        Err(MoveError::OutOfBounds { row: 5, col: 0, .. })
    ));
    assert!(Move::at(Side::Enemies, 4, 4, Direction::Up).is_ok());
}

#[test]
fn test_piece_counts_after_every_legal_move() {
    let b = board(MIDGAME);
    let enemies = b.count(Cell::Enemy);

    for side in [Side::Musketeers, Side::Enemies] {
        for legal in legal_moves(&b, side) {
            let mut after = b.clone();
            apply(&mut after, &legal);
            assert_eq!(after.count(Cell::Musketeer), 3);
            let expected = match side {
                Side::Musketeers => enemies - 1,
                Side::Enemies => enemies,
            };
            assert_eq!(after.count(Cell::Enemy), expected);
        }
    }
}

#[test]
fn test_musketeers_in_row_two() {
    for filler in ['o', '.'] {
        let row = format!("{f} {f} {f} {f} {f}\n", f = filler);
        let text = format!("{row}{row}M {filler} M {filler} M\n{row}{row}");
        let b = board(&text);
        assert!(enemies_win(&b));
        let expected = if filler == 'o' {
            Outcome::EnemiesWin
        } else {
            // Nobody adjacent either: the Musketeer check wins the tie.
            Outcome::MusketeersWin
        };
        assert_eq!(evaluate(&b), expected);
    }
}

#[test]
fn test_no_adjacent_enemy_is_musketeer_win() {
    let b = board(
        "M . o . .\n\
         . o . o .\n\
         o . M . o\n\
         . o . o .\n\
         . . o . M\n",
    );
    assert_eq!(evaluate(&b), Outcome::MusketeersWin);
}

#[test]
fn test_midgame_is_ongoing() {
    assert_eq!(evaluate(&board(MIDGAME)), Outcome::Ongoing);
}
