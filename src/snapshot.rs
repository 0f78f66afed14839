//! Board snapshot files.
//!
//! A snapshot is five lines of five symbols (`M`, `o`, `.`) separated by
//! single spaces, each line ending in a newline.

use crate::games::musketeers::{Board, BoardError};
use derive_more::{Display, Error, From};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Prefix added to the board file name when saving.
pub const DEFAULT_SAVE_PREFIX: &str = "out-";

/// Failure to load a board snapshot. The game does not start.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[display("Error opening the file {}: {}", path.display(), message)]
    #[from(ignore)]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },

    /// The file was read but is not a valid board.
    #[display("Invalid board in the input file: {}", _0)]
    Board(#[error(source)] BoardError),
}

/// Failure to write a board snapshot.
#[derive(Debug, Clone, Display, Error)]
#[display("Error writing the saved file {}: {}", path.display(), message)]
pub struct SaveError {
    /// Target path.
    pub path: PathBuf,
    /// Underlying I/O error text.
    pub message: String,
}

/// Reads and parses a snapshot file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        warn!(error = %e, "Failed to read board file");
        LoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let board: Board = text.parse()?;
    info!("Board loaded");
    Ok(board)
}

/// Derives the save path: `prefix` prepended to the file name, same directory.
#[instrument]
pub fn save_path(load_path: &Path, prefix: &str) -> PathBuf {
    let name = load_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_path.with_file_name(format!("{}{}", prefix, name))
}

/// Where finished or interrupted games are written.
pub trait BoardStore {
    /// Persists the board, returning where it went.
    fn save(&mut self, board: &Board) -> Result<PathBuf, SaveError>;
}

/// Writes snapshots to one fixed file, replacing it each time.
#[derive(Debug, Clone)]
pub struct FileStore {
    target: PathBuf,
}

impl FileStore {
    /// Creates a store writing to `target`.
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Store for a board loaded from `load_path`, using the save prefix.
    pub fn beside(load_path: &Path, prefix: &str) -> Self {
        Self::new(save_path(load_path, prefix))
    }

    /// The file this store writes.
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl BoardStore for FileStore {
    #[instrument(skip(self, board), fields(save_to = %self.target.display()))]
    fn save(&mut self, board: &Board) -> Result<PathBuf, SaveError> {
        debug!("Writing board snapshot");
        std::fs::write(&self.target, board.to_string()).map_err(|e| {
            warn!(error = %e, "Failed to write board snapshot");
            SaveError {
                path: self.target.clone(),
                message: e.to_string(),
            }
        })?;
        info!("Board saved");
        Ok(self.target.clone())
    }
}
