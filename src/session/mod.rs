//! Cooking focus mode: the guided execution of a single recipe.
//!
//! A session walks Prep (ingredient checklist) → Cooking (step-by-step
//! instructions with an advisory countdown) → Victory, granting XP/gold
//! pops along the way. Sessions are transient: dropped on quit, nothing
//! but the already-applied progress deltas survives.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
