//! Assorted constants & hard-coded configuration

/// Length of the snake in a freshly-initialized game
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Width & height of the grid when none is specified
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid on which the initial snake fits.  The body extends two cells
/// below the center, so `N / 2 + 2 < N` must hold.
pub const MIN_GRID_SIZE: u16 = 5;

/// Points awarded for each piece of food eaten
pub const FOOD_REWARD: u32 = 10;

/// How many random cells to try when placing food before giving up and
/// accepting the last candidate
pub const MAX_FOOD_ATTEMPTS: usize = 100;

/// Grid size used for spectated autopilot sessions
pub const SPECTATOR_GRID_SIZE: u16 = 15;

/// Number of ticks after which a `run` game is stopped if it is still going
pub const DEFAULT_TICK_LIMIT: u64 = 10_000;

/// Number of ticks a `spectate` run lasts by default
pub const DEFAULT_SPECTATE_TICKS: u64 = 1_000;
