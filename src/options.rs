use crate::engine::{BoundaryMode, GameState, GridSize};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The settings a game is started with
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    pub mode: BoundaryMode,
    pub grid_size: GridSize,
}

impl Options {
    pub fn new(mode: BoundaryMode, grid_size: GridSize) -> Options {
        Options { mode, grid_size }
    }

    /// Create the initial state of a game played with these options
    pub fn new_game<R: Rng>(&self, rng: &mut R) -> GameState {
        GameState::new(self.mode, self.grid_size, rng)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mode, {} grid", self.mode, self.grid_size)
    }
}
