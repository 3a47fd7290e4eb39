// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;

// Experience and progression constants
pub const XP_PER_LEVEL: u64 = 1000;
pub const STARTING_XP: u64 = 1250;
pub const STARTING_GOLD: u64 = 50;

// Focus mode constants
pub const FOCUS_TIMER_DEFAULT_SECONDS: u32 = 1500; // 25 min
pub const POP_LIFETIME_SECONDS: f64 = 1.0;

// Kitchen constants
pub const ROLL_SUSPENSE_TICKS: u32 = 10; // 1s of dice animation

// Inventory constants
pub const RECIPES_PER_PAGE: usize = 20;

// Journal constants
pub const JOURNAL_CAPACITY: usize = 50;
