//! Input collaborators that supply one line of move text per turn.

mod scripted;
mod stdin;

pub use scripted::ScriptedSource;
pub use stdin::StdinSource;

use crate::games::musketeers::Side;
use anyhow::Result;

/// Something that can be asked for the next move.
pub trait MoveSource {
    /// Returns the next raw line for `side`, or `None` once input is exhausted.
    ///
    /// Blocks until a line is available.
    fn read_line(&mut self, side: Side) -> Result<Option<String>>;
}
