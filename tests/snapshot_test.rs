//! Tests for loading and saving board snapshots.

use std::fs;
use three_musketeers::{BoardError, BoardStore, Cell, FileStore, LoadError, load, save_path};

const START: &str = "o o o o M\n\
                     o o o o o\n\
                     o o M o o\n\
                     o o o o o\n\
                     M o o o o\n";

#[test]
fn test_save_of_load_reproduces_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("board.txt");
    fs::write(&input, START).unwrap();

    let board = load(&input).unwrap();
    assert_eq!(board.count(Cell::Musketeer), 3);

    let mut store = FileStore::beside(&input, "out-");
    let saved = store.save(&board).unwrap();
    assert_eq!(saved, dir.path().join("out-board.txt"));
    assert_eq!(fs::read_to_string(saved).unwrap(), START);
}

#[test]
fn test_crlf_file_loads_and_saves_with_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("windows.txt");
    fs::write(&input, START.replace('\n', "\r\n")).unwrap();

    let board = load(&input).unwrap();
    let saved = FileStore::beside(&input, "out-").save(&board).unwrap();
    assert_eq!(fs::read_to_string(saved).unwrap(), START);
}

#[test]
fn test_multi_char_token_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.txt");
    fs::write(&input, START.replacen("o o o o o", "o MM o o o", 1)).unwrap();

    assert!(matches!(
        load(&input),
        Err(LoadError::Board(BoardError::MalformedDimensions { .. }))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_invalid_character_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, START.replacen('M', "X", 1)).unwrap();

    let err = load(&input).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Board(BoardError::InvalidCell {
            symbol: 'X',
            row: 0,
            col: 4
        })
    ));
}

#[test]
fn test_wrong_dimensions_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.txt");
    let six_rows = format!("{START}o o o o o\n");
    fs::write(&input, six_rows).unwrap();

    assert!(matches!(
        load(&input),
        Err(LoadError::Board(BoardError::MalformedDimensions { .. }))
    ));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let board = START.parse().unwrap();
    let mut store = FileStore::new(dir.path().join("nope").join("out.txt"));
    let err = store.save(&board).unwrap_err();
    assert!(err.to_string().contains("out.txt"));
}

#[test]
fn test_save_path_keeps_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("game.txt");
    assert_eq!(save_path(&input, "saved-"), dir.path().join("saved-game.txt"));
}
