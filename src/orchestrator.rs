//! Game orchestration between the players, the session and the save file.

use crate::games::musketeers::{Command, GameSession, Phase, Side, parse_command};
use crate::players::MoveSource;
use crate::snapshot::{BoardStore, SaveError};
use anyhow::Result;
use derive_getters::Getters;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

const INSTRUCTIONS: &str = "*** The Three Musketeers Game ***\n\
To make a move, enter the location of the piece you want to move,\n\
and the direction you want it to move. Locations are indicated as\n\
a letter (A, B, C, D, E) followed by a number (1, 2, 3, 4, or 5).\n\
Directions are indicated as left, right, up, down (L/l, R/r, U/u, D/d).\n\
For example, to move the Musketeer from the top right-hand corner\n\
to the row below, enter 'A,5 = L' or 'a,5=l' (without quotes).\n\
To stop and save the game, enter '0,0=E'.\n";

/// How a run ended.
#[derive(Debug, Getters)]
pub struct GameReport {
    /// Final phase, always `Interrupted` or `Terminal`.
    phase: Phase,
    /// Number of accepted moves.
    moves: usize,
    /// Where the board was saved, or why it was not.
    saved: Result<PathBuf, SaveError>,
}

/// Drives one session to its end.
pub struct Orchestrator<S, B, W> {
    session: GameSession,
    source: S,
    store: B,
    out: W,
    show_instructions: bool,
}

impl<S, B, W> Orchestrator<S, B, W>
where
    S: MoveSource,
    B: BoardStore,
    W: Write,
{
    /// Creates an orchestrator.
    pub fn new(session: GameSession, source: S, store: B, out: W) -> Self {
        Self {
            session,
            source,
            store,
            out,
            show_instructions: true,
        }
    }

    /// Turns the how-to-play banner on or off.
    pub fn with_instructions(mut self, show: bool) -> Self {
        self.show_instructions = show;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the orchestrator, returning the session and output.
    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.out)
    }

    /// Runs the game loop until a side wins or play is interrupted, then saves.
    ///
    /// A failed save is reported in the output and in the returned report;
    /// it is not an error. Errors come only from writing the transcript.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameReport> {
        info!("Starting game orchestration");

        if self.show_instructions {
            writeln!(self.out, "{}", INSTRUCTIONS)?;
        }
        write!(self.out, "{}", self.session.board().render())?;

        while let Some(side) = self.session.to_move() {
            self.turn(side)?;
        }

        let phase = self.session.phase();
        match phase {
            Phase::Terminal(outcome) => writeln!(self.out, "\n{}\n", outcome)?,
            _ => writeln!(self.out, "\nGame interrupted. Exiting...")?,
        }

        let saved = self.store.save(self.session.board());
        match &saved {
            Ok(path) => writeln!(
                self.out,
                "Saving {}...Done.\nAu revoir!\n",
                path.display()
            )?,
            Err(e) => {
                warn!(error = %e, "Board not saved");
                writeln!(self.out, "{}\nFailed to save the game state.", e)?;
            }
        }
        self.out.flush()?;

        Ok(GameReport {
            phase,
            moves: self.session.history().len(),
            saved,
        })
    }

    fn turn(&mut self, side: Side) -> Result<()> {
        match side {
            Side::Musketeers => write!(self.out, "\nGive the Musketeer's move\n>")?,
            Side::Enemies => write!(self.out, "\nGive the enemy's move\n>")?,
        }
        self.out.flush()?;

        let line = match self.source.read_line(side) {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Input exhausted, interrupting");
                self.session.interrupt();
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "Could not read move, interrupting");
                self.session.interrupt();
                return Ok(());
            }
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        match self.session.submit(command) {
            Ok(_) if command == Command::Interrupt => {}
            Ok(_) => write!(self.out, "{}", self.session.board().render())?,
            Err(e) => writeln!(self.out, "\n{}", e)?,
        }
        Ok(())
    }
}
