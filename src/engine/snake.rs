use super::position::{GridSize, Position};
use crate::consts;
use serde::Serialize;
use std::collections::VecDeque;

/// The body of the snake as a chain of grid cells
///
/// The segments are stored head first, tail last, and there is always at least
/// one of them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// Create a snake from its segments, head first.  Returns `None` if
    /// `segments` is empty.
    ///
    /// Segments are not checked for overlap, so that arbitrary board
    /// situations can be set up.
    pub fn new<I: IntoIterator<Item = Position>>(segments: I) -> Option<Snake> {
        let segments = VecDeque::from_iter(segments);
        (!segments.is_empty()).then_some(Snake { segments })
    }

    /// Create the snake a new game starts with: its head in the center of the
    /// grid and its body trailing straight down below it.
    pub(crate) fn initial(grid: GridSize) -> Snake {
        let center = grid.center();
        Snake {
            segments: (center..)
                .take(consts::INITIAL_SNAKE_LENGTH)
                .map(|y| Position::new(center, y))
                .collect(),
        }
    }

    /// Return the position of the snake's head
    pub fn head(&self) -> Position {
        // `segments` is never empty.
        self.segments[0]
    }

    /// Return the segment immediately behind the head, if any
    pub fn neck(&self) -> Option<Position> {
        self.segments.get(1).copied()
    }

    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; provided for API completeness alongside `len()`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Iterate over the segments, head first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Return a new snake that has moved its head to `head`.  If `grow` is
    /// `false`, the tail is dropped so that the length is unchanged.
    pub(crate) fn slither(&self, head: Position, grow: bool) -> Snake {
        let mut segments = self.segments.clone();
        segments.push_front(head);
        if !grow {
            let _ = segments.pop_back();
        }
        Snake { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snake() {
        assert_eq!(Snake::new([]), None);
    }

    #[test]
    fn initial_snake() {
        let snake = Snake::initial(GridSize::new(20).unwrap());
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [
                Position::new(10, 10),
                Position::new(10, 11),
                Position::new(10, 12)
            ]
        );
        assert_eq!(snake.head(), Position::new(10, 10));
        assert_eq!(snake.neck(), Some(Position::new(10, 11)));
        assert_eq!(snake.tail(), Position::new(10, 12));
    }

    #[test]
    fn initial_snake_fits_smallest_grid() {
        let grid = GridSize::MINIMUM;
        let snake = Snake::initial(grid);
        assert!(snake.segments().all(|p| !p.is_out_of_bounds(grid)));
    }

    #[test]
    fn slither_without_growing() {
        let snake = Snake::new([Position::new(3, 3), Position::new(3, 4)]).unwrap();
        let moved = snake.slither(Position::new(3, 2), false);
        assert_eq!(
            moved.segments().collect::<Vec<_>>(),
            [Position::new(3, 2), Position::new(3, 3)]
        );
        // The receiver is left untouched
        assert_eq!(snake.head(), Position::new(3, 3));
    }

    #[test]
    fn slither_and_grow() {
        let snake = Snake::new([Position::new(3, 3)]).unwrap();
        let moved = snake.slither(Position::new(4, 3), true);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved.head(), Position::new(4, 3));
        assert_eq!(moved.tail(), Position::new(3, 3));
        assert_eq!(moved.neck(), Some(Position::new(3, 3)));
    }
}
