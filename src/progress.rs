//! Player progress ledger.
//!
//! Every XP/gold grant in the game funnels through [`PlayerProgress::apply`]
//! so the ledger stays auditable. Grants are applied the instant they are
//! earned; nothing is deferred and nothing is ever rolled back.

use serde::{Deserialize, Serialize};

use crate::constants::{STARTING_GOLD, STARTING_XP, XP_PER_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    Xp,
    Gold,
}

/// A single grant, already final when constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub amount: u64,
    pub kind: RewardKind,
}

impl Reward {
    pub fn xp(amount: u64) -> Self {
        Self {
            amount,
            kind: RewardKind::Xp,
        }
    }

    pub fn gold(amount: u64) -> Self {
        Self {
            amount,
            kind: RewardKind::Gold,
        }
    }
}

/// Process-wide totals. Lives for the lifetime of the run; nothing persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub total_xp: u64,
    pub gold: u64,
}

impl PlayerProgress {
    /// Fresh progress with the standard starting balances.
    pub fn new() -> Self {
        Self {
            total_xp: STARTING_XP,
            gold: STARTING_GOLD,
        }
    }

    /// The single mutation entry point for the whole game.
    pub fn apply(&mut self, reward: Reward) {
        match reward.kind {
            RewardKind::Xp => self.total_xp += reward.amount,
            RewardKind::Gold => self.gold += reward.amount,
        }
    }

    /// Derived level: one level per 1000 XP, starting at level 1.
    pub fn level(&self) -> u32 {
        (self.total_xp / XP_PER_LEVEL + 1) as u32
    }

    /// XP earned within the current level, for the HUD progress gauge.
    pub fn xp_into_level(&self) -> u64 {
        self.total_xp % XP_PER_LEVEL
    }
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new()
    }
}
