use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A heading on the grid.  `y` grows downwards, so `Up` decrements it.
///
/// Variants are declared in the order the autopilot considers them.
#[derive(Clone, Copy, Debug, Deserialize, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Iterate over all directions in declaration order
    pub fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// Return the `(dx, dy)` unit movement for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns `true` if turning from `self` to `other` would be a 180°
    /// reversal into the snake's own neck
    pub fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Direction, ParseDirectionError> {
        Direction::iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid direction {0:?}; expected one of up, down, left, right")]
pub struct ParseDirectionError(String);

/// What happens when the snake crosses the edge of the grid
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Crossing the edge is fatal
    #[default]
    Walls,

    /// Crossing the edge comes back in on the opposite side
    #[serde(alias = "passthrough")]
    Wrap,
}

impl BoundaryMode {
    pub fn iter() -> impl Iterator<Item = BoundaryMode> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryMode::Walls => "walls",
            BoundaryMode::Wrap => "wrap",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<BoundaryMode, ParseModeError> {
        if s.eq_ignore_ascii_case("passthrough") {
            return Ok(BoundaryMode::Wrap);
        }
        BoundaryMode::iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModeError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid boundary mode {0:?}; expected \"walls\" or \"wrap\"")]
pub struct ParseModeError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn iteration_order() {
        assert_eq!(
            Direction::iter().collect::<Vec<_>>(),
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down, true)]
    #[case(Direction::Down, Direction::Up, true)]
    #[case(Direction::Left, Direction::Right, true)]
    #[case(Direction::Right, Direction::Left, true)]
    #[case(Direction::Up, Direction::Left, false)]
    #[case(Direction::Up, Direction::Right, false)]
    #[case(Direction::Up, Direction::Up, false)]
    #[case(Direction::Left, Direction::Down, false)]
    fn test_is_opposite(#[case] a: Direction, #[case] b: Direction, #[case] r: bool) {
        assert_eq!(a.is_opposite(b), r);
    }

    #[rstest]
    #[case("up", Direction::Up)]
    #[case("DOWN", Direction::Down)]
    #[case("Left", Direction::Left)]
    #[case("right", Direction::Right)]
    fn parse_direction(#[case] s: &str, #[case] d: Direction) {
        assert_eq!(s.parse::<Direction>(), Ok(d));
    }

    #[test]
    fn parse_bad_direction() {
        let e = "north".parse::<Direction>().unwrap_err();
        assert_eq!(
            e.to_string(),
            r#"invalid direction "north"; expected one of up, down, left, right"#
        );
    }

    #[rstest]
    #[case("walls", BoundaryMode::Walls)]
    #[case("WRAP", BoundaryMode::Wrap)]
    #[case("passthrough", BoundaryMode::Wrap)]
    fn parse_mode(#[case] s: &str, #[case] m: BoundaryMode) {
        assert_eq!(s.parse::<BoundaryMode>(), Ok(m));
    }

    #[test]
    fn parse_bad_mode() {
        assert!("bounce".parse::<BoundaryMode>().is_err());
    }

    #[test]
    fn mode_display_width() {
        assert_eq!(format!("{:6}|", BoundaryMode::Wrap), "wrap  |");
    }
}
