//! JavaScript-facing bindings and the browser console log sink.
//!
//! The page owns rendering, gestures and animation; it drives a
//! [`TreasureStorm`] instance and reads the board back cell by cell.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::board::{Direction, Pos};
use crate::progress::{MemoryProgress, ProgressStore, suggested_level};
use crate::session::Session;

// --- Logging ----------------------------------------------------------------

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the browser console. Safe to call more than once.
pub(crate) fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// --- Game handle ------------------------------------------------------------

/// A play session with in-memory progress, exported to JS as `TreasureStorm`.
#[wasm_bindgen]
pub struct TreasureStorm {
    session: Session<MemoryProgress>,
    last_path: Vec<Pos>,
}

#[wasm_bindgen]
impl TreasureStorm {
    #[wasm_bindgen(constructor)]
    pub fn new(level: u32) -> TreasureStorm {
        TreasureStorm {
            session: Session::new(level, MemoryProgress::new()),
            last_path: Vec::new(),
        }
    }

    /// Apply a swipe ("up", "down", "left", "right") and return the resulting
    /// state name ("playing", "victory", "defeat").
    pub fn swipe(&mut self, direction: &str) -> Result<String, JsError> {
        let direction: Direction = direction.parse()?;
        let report = self.session.swipe(direction)?;
        self.last_path = report.path.cells().to_vec();
        Ok(report.state.to_string())
    }

    /// Cells crossed by the last swipe as flat `[row, col, row, col, ...]`,
    /// for the page to animate.
    pub fn last_path(&self) -> Vec<u8> {
        self.last_path.iter().flat_map(|p| [p.row, p.col]).collect()
    }

    /// Call when the move animation has finished; swipes are refused until then.
    pub fn settle(&mut self) {
        self.session.settle();
    }

    pub fn restart(&mut self) {
        self.last_path.clear();
        self.session.restart();
    }

    pub fn next_level(&mut self) -> Option<u32> {
        self.last_path.clear();
        self.session.next_level()
    }

    pub fn select_level(&mut self, level: u32) -> Result<(), JsError> {
        self.last_path.clear();
        Ok(self.session.select_level(level)?)
    }

    pub fn state(&self) -> String {
        self.session.state().to_string()
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    pub fn first_completion(&self) -> bool {
        self.session.first_completion()
    }

    pub fn level_number(&self) -> u32 {
        self.session.level().number()
    }

    pub fn level_name(&self) -> String {
        self.session.level().name().to_string()
    }

    pub fn moves_used(&self) -> u32 {
        self.session.board().moves_used()
    }

    pub fn max_moves(&self) -> u32 {
        self.session.board().max_moves()
    }

    pub fn player_row(&self) -> u8 {
        self.session.board().player().row
    }

    pub fn player_col(&self) -> u8 {
        self.session.board().player().col
    }

    /// Glyph of a cell (see the level file format); empty outside the grid.
    pub fn cell_glyph(&self, row: u8, col: u8) -> String {
        self.session
            .board()
            .kind_at(Pos::new(row, col))
            .map(|k| k.glyph().to_string())
            .unwrap_or_default()
    }

    pub fn is_visited(&self, row: u8, col: u8) -> bool {
        self.session.board().is_visited(Pos::new(row, col))
    }

    pub fn coins(&self) -> u32 {
        self.session.progress().coins()
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        self.session.progress().is_level_unlocked(level)
    }

    pub fn is_completed(&self, level: u32) -> bool {
        self.session.progress().is_level_completed(level)
    }

    /// Level the level-selection screen should preselect.
    pub fn suggested_level(&self) -> u32 {
        suggested_level(self.session.progress())
    }

    /// Credit coins from rewards collected outside the puzzle (achievements,
    /// daily tasks).
    pub fn claim_reward(&mut self, amount: u32) {
        self.session.progress_mut().add_coins(amount);
    }

    /// Spend coins on a shop item. Returns false when the balance is too low.
    pub fn purchase(&mut self, price: u32) -> bool {
        match self.session.progress_mut().spend_coins(price) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("purchase refused: {err}");
                false
            }
        }
    }
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
impl TreasureStorm {
    /// The live board (cells, player, moves) as JSON.
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.session.board())?)
    }
}
