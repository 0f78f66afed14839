//! Player that replays a fixed list of lines.

use super::MoveSource;
use crate::games::musketeers::Side;
use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Replays prepared input, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    served: usize,
}

impl ScriptedSource {
    /// Creates a source from lines in play order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            served: 0,
        }
    }

    /// Number of lines handed out so far.
    pub fn served(&self) -> usize {
        self.served
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveSource for ScriptedSource {
    #[instrument(skip(self))]
    fn read_line(&mut self, side: Side) -> Result<Option<String>> {
        let line = self.lines.pop_front();
        if let Some(line) = &line {
            self.served += 1;
            debug!(%line, "Scripted move");
        }
        Ok(line)
    }
}
