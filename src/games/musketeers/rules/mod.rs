//! Game rules for Three Musketeers.
//!
//! Pure functions over a `Board`. Validation, execution and win
//! evaluation are kept apart so the session can sequence them and the
//! invariants can check their results independently.

pub mod movement;
pub mod win;

pub use movement::{apply, legal_moves, validate};
pub use win::{enemies_win, evaluate, musketeers_win};
