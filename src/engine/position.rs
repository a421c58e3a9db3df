use super::direction::Direction;
use crate::consts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// A cell on the grid.  Coordinates are signed so that a single step off the
/// edge can be represented before it is wrapped or rejected.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return the position one cell away in `direction`.  No bounds checking
    /// is performed.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Bring the position back onto a grid of size `grid` by wrapping each
    /// coordinate around to the opposite edge
    pub fn wrap(self, grid: GridSize) -> Position {
        let n = grid.as_i32();
        Position {
            x: self.x.rem_euclid(n),
            y: self.y.rem_euclid(n),
        }
    }

    pub fn is_out_of_bounds(self, grid: GridSize) -> bool {
        let n = grid.as_i32();
        self.x < 0 || self.x >= n || self.y < 0 || self.y >= n
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The width & height of a square grid
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct GridSize(u16);

impl GridSize {
    pub const MINIMUM: GridSize = GridSize(consts::MIN_GRID_SIZE);

    /// Returns `None` if `size` is too small to hold a freshly-placed snake
    pub const fn new(size: u16) -> Option<GridSize> {
        if size >= consts::MIN_GRID_SIZE {
            Some(GridSize(size))
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub(crate) fn as_i32(self) -> i32 {
        i32::from(self.0)
    }

    /// The coordinate of the middle row/column, rounded down
    pub(crate) fn center(self) -> i32 {
        self.as_i32() / 2
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(consts::DEFAULT_GRID_SIZE)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}×{0}", self.0)
    }
}

impl TryFrom<u16> for GridSize {
    type Error = GridSizeError;

    fn try_from(value: u16) -> Result<GridSize, GridSizeError> {
        GridSize::new(value).ok_or(GridSizeError::TooSmall(value))
    }
}

impl From<GridSize> for u16 {
    fn from(value: GridSize) -> u16 {
        value.0
    }
}

impl FromStr for GridSize {
    type Err = GridSizeError;

    fn from_str(s: &str) -> Result<GridSize, GridSizeError> {
        s.parse::<u16>()?.try_into()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GridSizeError {
    #[error("grid size {0} is too small; must be at least {min}", min = consts::MIN_GRID_SIZE)]
    TooSmall(u16),
    #[error("invalid grid size")]
    Parse(#[from] ParseIntError),
}
