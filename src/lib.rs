//! Grimoire - Terminal Recipe RPG Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod game_state;
pub mod journal;
pub mod navigator;
pub mod progress;
pub mod provider;
pub mod recipe;
pub mod repository;
pub mod rewards;
pub mod roll;
pub mod session;
pub mod tavern;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game_state::GameState;
pub use progress::{PlayerProgress, Reward, RewardKind};
pub use recipe::{Difficulty, Ingredient, Recipe};
pub use repository::RecipeRepository;
pub use session::CookingSession;
