use super::direction::Direction;
use super::{check_self_collision, GameState};

/// Choose a heading for a computer-controlled snake.
///
/// Of the directions that do not reverse the snake and do not immediately
/// run it into a wall or its own body, the one whose next cell is closest to
/// the food (by Manhattan distance) wins; ties go to the earliest of up, down,
/// left, right.  This only looks one move ahead.  If every move is fatal, the
/// current direction is returned.
pub fn ai_direction(state: &GameState) -> Direction {
    Direction::iter()
        .filter(|&d| !state.direction.is_opposite(d))
        .filter_map(|d| state.next_head(d).map(|pos| (d, pos)))
        .filter(|&(_, pos)| !check_self_collision(pos, &state.snake))
        .min_by_key(|&(_, pos)| pos.manhattan_distance(state.food))
        .map_or(state.direction, |(d, _)| d)
}
