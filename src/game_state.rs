//! Process-wide game state.
//!
//! Everything lives in memory for the lifetime of the run; closing the
//! program loses it all, which is the intended model.

use crate::journal::Journal;
use crate::navigator::Navigator;
use crate::progress::PlayerProgress;
use crate::repository::RecipeRepository;
use crate::tavern::MusicState;

#[derive(Debug, Clone)]
pub struct GameState {
    pub progress: PlayerProgress,
    pub repository: RecipeRepository,
    pub navigator: Navigator,
    pub music: MusicState,
    pub journal: Journal,
    /// True while a provider batch is in flight; gates the sync actions.
    pub loading: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            progress: PlayerProgress::new(),
            repository: RecipeRepository::new(),
            navigator: Navigator::new(),
            music: MusicState::new(),
            journal: Journal::new(),
            loading: false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
