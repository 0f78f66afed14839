//! Interactive player reading lines from a terminal or pipe.

use super::MoveSource;
use crate::games::musketeers::Side;
use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, instrument};

/// Reads one move per line from any buffered reader.
pub struct StdinSource<R> {
    reader: R,
}

impl<R: BufRead> StdinSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl StdinSource<std::io::StdinLock<'static>> {
    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> MoveSource for StdinSource<R> {
    #[instrument(skip(self))]
    fn read_line(&mut self, side: Side) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read move from input")?;
        if read == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
