//! Core domain types for the Three Musketeers game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Number of Musketeers on every legal board.
pub const MUSKETEER_COUNT: usize = 3;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Cell {
    /// One of the three Musketeers.
    Musketeer,
    /// One of Cardinal Richelieu's men.
    Enemy,
    /// Nobody here.
    Empty,
}

impl Cell {
    /// Snapshot symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Musketeer => 'M',
            Cell::Enemy => 'o',
            Cell::Empty => '.',
        }
    }

    /// Parses a snapshot symbol. Only `M`, `o` and `.` are recognised.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Cell::Musketeer),
            'o' => Some(Cell::Enemy),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which player is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Side {
    /// The Musketeers (always move first).
    Musketeers,
    /// Cardinal Richelieu's men.
    Enemies,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Musketeers => Side::Enemies,
            Side::Enemies => Side::Musketeers,
        }
    }

    /// The piece this side moves.
    pub fn piece(self) -> Cell {
        match self {
            Side::Musketeers => Cell::Musketeer,
            Side::Enemies => Cell::Enemy,
        }
    }

    /// What the destination must hold for a move by this side.
    ///
    /// Musketeers capture onto enemy cells; enemies only advance onto empty ones.
    pub fn required_destination(self) -> Cell {
        match self {
            Side::Musketeers => Cell::Enemy,
            Side::Enemies => Cell::Empty,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Musketeers => write!(f, "Musketeers"),
            Side::Enemies => write!(f, "Cardinal Richelieu's men"),
        }
    }
}

/// Orthogonal direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Direction {
    /// Towards row A.
    Up,
    /// Towards row E.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column 5.
    Right,
}

impl Direction {
    /// Parses `L`, `R`, `U` or `D` in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Upper-case letter used in move notation.
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Row and column offsets of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A checked board coordinate (row and column both in `0..5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate, rejecting anything off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Row index (0 is row A).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 is column 1).
    pub fn col(self) -> usize {
        self.col
    }

    /// The neighbouring coordinate one step away, if it is still on the board.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Coord::new(row, col).ok()
    }

    /// All on-board orthogonal neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        <Direction as strum::IntoEnumIterator>::iter().filter_map(move |d| self.step(d))
    }

    /// Every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

/// Errors raised by board access and snapshot parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..5`.
    #[display("Position ({row}, {col}) is outside the 5x5 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Snapshot contains a symbol other than `M`, `o` or `.`.
    #[display("Invalid character {symbol:?} at row {row}, column {col}")]
    InvalidCell {
        /// The offending symbol.
        symbol: char,
        /// Zero-based row of the symbol.
        row: usize,
        /// Zero-based column of the symbol.
        col: usize,
    },

    /// Snapshot is not five rows of five cells.
    #[display("Malformed board: {reason}")]
    MalformedDimensions {
        /// What was wrong with the layout.
        reason: String,
    },
}

/// 5x5 Three Musketeers board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let coord = Coord::new(row, col)?;
        Ok(self.cell(coord))
    }

    /// Sets the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let coord = Coord::new(row, col)?;
        self.put(coord, cell);
        Ok(())
    }

    /// Gets the cell at an already checked coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Overwrites the cell at an already checked coordinate.
    pub fn put(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Counts cells of the given kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == kind).count()
    }

    /// Positions of all Musketeers in row-major order.
    pub fn musketeers(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|&coord| self.cell(coord) == Cell::Musketeer)
            .collect()
    }

    /// Formats the board as the interactive grid shown between turns.
    pub fn render(&self) -> String {
        let separator = "  +---+---+---+---+---+\n";
        let mut out = String::from("\n    1   2   3   4   5\n");
        out.push_str(separator);
        for (row, cells) in self.cells.iter().enumerate() {
            out.push((b'A' + row as u8) as char);
            out.push_str(" |");
            for cell in cells {
                out.push(' ');
                out.push(cell.symbol());
                out.push_str(" |");
            }
            out.push('\n');
            out.push_str(separator);
        }
        out
    }
}

/// Snapshot format: five lines of five symbols separated by single spaces.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cells in &self.cells {
            let line = cells
                .iter()
                .map(|c| c.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument(skip(s), fields(len = s.len()))]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != BOARD_SIZE {
            return Err(BoardError::MalformedDimensions {
                reason: format!("expected {} rows, found {}", BOARD_SIZE, lines.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split(' ').collect();
            if tokens.len() != BOARD_SIZE {
                return Err(BoardError::MalformedDimensions {
                    reason: format!(
                        "row {} has {} cells, expected {}",
                        row + 1,
                        tokens.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                let mut chars = token.chars();
                let symbol = match (chars.next(), chars.next()) {
                    (Some(symbol), None) => symbol,
                    _ => {
                        return Err(BoardError::MalformedDimensions {
                            reason: format!(
                                "row {} column {} is {:?}, expected a single symbol",
                                row + 1,
                                col + 1,
                                token
                            ),
                        });
                    }
                };
                let cell = Cell::from_symbol(symbol)
                    .ok_or(BoardError::InvalidCell { symbol, row, col })?;
                board.cells[row][col] = cell;
            }
        }

        Ok(board)
    }
}
