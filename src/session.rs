//! One player working through levels: the caller side of the engine.
//!
//! The session owns the live board, serializes swipes with a busy latch (the
//! presentation layer animates a move and calls [`Session::settle`] when done),
//! and turns victories into progress-store updates.

use log::{debug, info};
use thiserror::Error;

use crate::board::{BoardState, Direction, LEVEL_COUNT, Level, create_level};
use crate::game::{GameState, apply_path};
use crate::path::{Path, resolve_path};
use crate::progress::{FIRST_COMPLETION_REWARD, ProgressStore};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a move is still in progress")]
    Busy,

    #[error("level already ended in {0}")]
    Finished(GameState),

    #[error("level {0} is locked")]
    Locked(u32),
}

/// What one swipe did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub path: Path,
    pub state: GameState,
    pub moves_used: u32,
    /// Set on the victory that completed the level for the first time.
    pub first_completion: bool,
}

pub struct Session<P: ProgressStore> {
    level: Level,
    board: BoardState,
    state: GameState,
    first_completion: bool,
    busy: bool,
    progress: P,
}

impl<P: ProgressStore> Session<P> {
    pub fn new(level_number: u32, progress: P) -> Self {
        let level = create_level(level_number);
        let board = BoardState::new(&level);
        Self {
            level,
            board,
            state: GameState::Playing,
            first_completion: false,
            busy: false,
            progress,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the last victory was the level's first completion.
    pub fn first_completion(&self) -> bool {
        self.first_completion
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut P {
        &mut self.progress
    }

    /// Resolve and apply one swipe.
    ///
    /// A move that went somewhere leaves the session busy until [`settle`]
    /// is called; an illegal move (empty path) ends the level without latching.
    ///
    /// [`settle`]: Session::settle
    pub fn swipe(&mut self, direction: Direction) -> Result<MoveReport, SessionError> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        if self.state.is_over() {
            return Err(SessionError::Finished(self.state));
        }

        let path = resolve_path(&self.board, direction);
        let state = apply_path(&mut self.board, &path);
        debug!(
            "level {} {direction}: {} cells, {state}, moves {}/{}",
            self.level.number(),
            path.len(),
            self.board.moves_used(),
            self.board.max_moves()
        );

        self.state = state;
        self.busy = !path.is_empty();
        if state == GameState::Victory {
            self.first_completion = self.progress.record_completion(self.level.number());
            if self.first_completion {
                self.progress.add_coins(FIRST_COMPLETION_REWARD);
                info!(
                    "level {} completed for the first time, +{FIRST_COMPLETION_REWARD} coins",
                    self.level.number()
                );
            } else {
                info!("level {} completed again", self.level.number());
            }
        }

        Ok(MoveReport {
            path,
            state,
            moves_used: self.board.moves_used(),
            first_completion: self.first_completion,
        })
    }

    /// Release the busy latch once the move has been presented.
    pub fn settle(&mut self) {
        self.busy = false;
    }

    pub fn restart(&mut self) {
        debug!("restarting level {}", self.level.number());
        let level = self.level.clone();
        self.load(level);
    }

    /// Move on to the following level. Returns `None` (and stays put) after
    /// the last level, when the caller should go back to level selection.
    pub fn next_level(&mut self) -> Option<u32> {
        let next = self.level.number().checked_add(1)?;
        if next > LEVEL_COUNT {
            return None;
        }
        self.load(create_level(next));
        Some(next)
    }

    /// Jump to a level picked from level selection.
    pub fn select_level(&mut self, number: u32) -> Result<(), SessionError> {
        if !self.progress.is_level_unlocked(number) {
            return Err(SessionError::Locked(number));
        }
        self.load(create_level(number));
        Ok(())
    }

    fn load(&mut self, level: Level) {
        self.board = BoardState::new(&level);
        self.level = level;
        self.state = GameState::Playing;
        self.first_completion = false;
        self.busy = false;
    }
}
