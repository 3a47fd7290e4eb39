//! Cooking session data structures.

use uuid::Uuid;

use crate::constants::{FOCUS_TIMER_DEFAULT_SECONDS, POP_LIFETIME_SECONDS};
use crate::progress::RewardKind;
use crate::recipe::Recipe;

/// Focus-mode phases. Strictly linear; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Prep,
    Cooking,
    Victory,
}

/// A transient floating reward notification.
///
/// Pops are cosmetic: the ledger is updated at grant time, and a pop
/// expiring (or the whole session being abandoned) changes nothing.
#[derive(Debug, Clone)]
pub struct RewardPop {
    pub id: Uuid,
    pub amount: u64,
    pub kind: RewardKind,
    lifetime: f64,
}

impl RewardPop {
    pub fn new(amount: u64, kind: RewardKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            lifetime: 0.0,
        }
    }

    /// Advances the pop's age. Returns false once the display lifetime is
    /// spent and the pop should be dropped.
    pub fn tick(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.lifetime <= POP_LIFETIME_SECONDS
    }
}

/// User-controlled countdown. Purely advisory: it gates no transition,
/// it just counts down while running and stops itself at zero.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    pub seconds_left: u32,
    pub running: bool,
    fraction: f64,
}

impl CountdownTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds_left: seconds,
            running: false,
            fraction: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        if self.seconds_left > 0 {
            self.running = !self.running;
        }
    }

    /// Consumes `delta` seconds of wall time, carrying sub-second
    /// fractions across ticks so pause/resume loses nothing.
    pub fn tick(&mut self, delta: f64) {
        if !self.running {
            return;
        }
        self.fraction += delta;
        while self.fraction >= 1.0 && self.seconds_left > 0 {
            self.fraction -= 1.0;
            self.seconds_left -= 1;
        }
        if self.seconds_left == 0 {
            self.running = false;
            self.fraction = 0.0;
        }
    }

    pub fn display(&self) -> String {
        format!("{}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

/// One focus-mode run over a single recipe.
#[derive(Debug, Clone)]
pub struct CookingSession {
    pub recipe: Recipe,
    pub phase: SessionPhase,
    pub checklist: Vec<bool>,
    /// Bounded to [0, instructions.len() - 1]
    pub instruction_index: usize,
    pub session_xp: u64,
    pub session_gold: u64,
    pub timer: CountdownTimer,
    pub pops: Vec<RewardPop>,
}

impl CookingSession {
    pub fn new(recipe: Recipe) -> Self {
        let checklist = vec![false; recipe.ingredients.len()];
        Self {
            recipe,
            phase: SessionPhase::Prep,
            checklist,
            instruction_index: 0,
            session_xp: 0,
            session_gold: 0,
            timer: CountdownTimer::new(FOCUS_TIMER_DEFAULT_SECONDS),
            pops: Vec::new(),
        }
    }

    pub fn all_ingredients_checked(&self) -> bool {
        self.checklist.iter().all(|&checked| checked)
    }

    pub fn is_last_instruction(&self) -> bool {
        self.instruction_index + 1 >= self.recipe.instructions.len()
    }
}
