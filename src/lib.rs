//! Three Musketeers - a 5x5 board game engine
//!
//! Three Musketeers face Cardinal Richelieu's men. A Musketeer moves by
//! capturing an orthogonally adjacent enemy; an enemy moves onto an
//! adjacent empty square. The Musketeers win once no enemy is next to any
//! of them, the enemies win by lining all three Musketeers up in one row or
//! column.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the turn state machine (`GameSession`)
//! - **Snapshot**: loading and saving the text board format
//! - **Players**: input collaborators supplying one move per turn
//! - **Orchestrator**: the interactive loop tying them together
//!
//! # Example
//!
//! ```
//! use three_musketeers::{Board, Command, Coord, Direction, GameSession, Phase};
//!
//! let board: Board = "M o . . .\n\
//!                     . o . . .\n\
//!                     . . M . .\n\
//!                     . . . o .\n\
//!                     . . . . M\n"
//!     .parse()
//!     .unwrap();
//! let mut game = GameSession::new(board);
//! let phase = game
//!     .submit(Command::Move {
//!         origin: Coord::new(0, 0).unwrap(),
//!         direction: Direction::Right,
//!     })
//!     .unwrap();
//! assert_eq!(phase, Phase::AwaitingEnemyMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod snapshot;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::musketeers::{
    BOARD_SIZE, Board, BoardError, Cell, Command, Coord, Direction, GameSession, INTERRUPT_SENTINEL,
    LegalMove, MUSKETEER_COUNT, Move, MoveError, Outcome, ParseError, Phase, Side, parse_command,
};

// Crate-level exports - Rules and invariants
pub use games::musketeers::{invariants, rules};

// Crate-level exports - Orchestration
pub use orchestrator::{GameReport, Orchestrator};

// Crate-level exports - Players
pub use players::{MoveSource, ScriptedSource, StdinSource};

// Crate-level exports - Persistence
pub use snapshot::{
    BoardStore, DEFAULT_SAVE_PREFIX, FileStore, LoadError, SaveError, load, save_path,
};
