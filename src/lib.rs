//! Treasure Storm core crate.
//!
//! A sliding-token puzzle on a 7×8 grid: each swipe sends the token sliding
//! until something stops it, and a level is won once every open cell has been
//! crossed within the move budget. Enemies, sticky floors, double steps,
//! teleport pairs and barriers shape the slides.
//!
//! - [`board`]: cell model, level catalog and the per-play board state
//! - [`path`]: slide resolution for one swipe
//! - [`game`]: applying a slide and deciding victory / defeat
//! - [`progress`] and [`session`]: unlocks, coins and the swipe latch
//!
//! The JS page drives everything through the exported [`TreasureStorm`] class.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod game;
pub mod path;
pub mod progress;
pub mod session;
mod web;

pub use board::{
    BoardState, Cell, CellKind, Direction, LEVEL_COUNT, Level, LevelDesc, LevelError, Pos, Portal,
    create_level,
};
pub use game::{GameState, apply_path};
pub use path::{Path, resolve_path};
pub use progress::{
    FIRST_COMPLETION_REWARD, MemoryProgress, ProgressError, ProgressStore, suggested_level,
};
pub use session::{MoveReport, Session, SessionError};
pub use web::TreasureStorm;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    web::init_logging();
}
