//! Player progress: which levels are open or finished, and the coin balance.
//!
//! The engine never touches this directly; [`crate::session::Session`] records
//! completions here and pays out the first-completion reward.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::board::LEVEL_COUNT;

/// Coins paid the first time a level is completed.
pub const FIRST_COMPLETION_REWARD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u32, available: u32 },
}

pub trait ProgressStore {
    fn is_level_completed(&self, level: u32) -> bool;

    /// Mark `level` complete. Returns true only the first time.
    fn record_completion(&mut self, level: u32) -> bool;

    fn coins(&self) -> u32;

    fn add_coins(&mut self, amount: u32);

    fn spend_coins(&mut self, amount: u32) -> Result<(), ProgressError>;

    /// Level 1 is always open; every other level opens once its predecessor
    /// has been completed.
    fn is_level_unlocked(&self, level: u32) -> bool {
        level == 1 || (level > 1 && self.is_level_completed(level - 1))
    }
}

/// In-memory progress; lives as long as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryProgress {
    completed: BTreeSet<u32>,
    coins: u32,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> impl Iterator<Item = u32> + '_ {
        self.completed.iter().copied()
    }
}

impl ProgressStore for MemoryProgress {
    fn is_level_completed(&self, level: u32) -> bool {
        self.completed.contains(&level)
    }

    fn record_completion(&mut self, level: u32) -> bool {
        self.completed.insert(level)
    }

    fn coins(&self) -> u32 {
        self.coins
    }

    fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    fn spend_coins(&mut self, amount: u32) -> Result<(), ProgressError> {
        if amount > self.coins {
            return Err(ProgressError::InsufficientCoins {
                needed: amount,
                available: self.coins,
            });
        }
        self.coins -= amount;
        Ok(())
    }
}

/// The level the level-selection screen should preselect: the first unlocked,
/// uncompleted level, or level 1 once everything is done.
pub fn suggested_level<P: ProgressStore + ?Sized>(store: &P) -> u32 {
    (1..=LEVEL_COUNT)
        .find(|&n| store.is_level_unlocked(n) && !store.is_level_completed(n))
        .unwrap_or(1)
}
