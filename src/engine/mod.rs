//! The game-state engine.
//!
//! A [`GameState`] is never modified by the engine: [`GameState::advance()`]
//! borrows the current state and returns its successor, so a previous state
//! stays valid for anyone still looking at it.
mod ai;
mod direction;
mod food;
mod position;
mod snake;
pub use self::ai::ai_direction;
pub use self::direction::{BoundaryMode, Direction, ParseDirectionError, ParseModeError};
pub use self::food::generate_food;
pub use self::position::{GridSize, GridSizeError, Position};
pub use self::snake::Snake;
use crate::consts;
use rand::Rng;
use serde::Serialize;

/// Everything there is to know about a game at one tick
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameState {
    /// The snake's segments, head first
    pub snake: Snake,

    /// The way the snake is heading
    pub direction: Direction,

    /// Location of the (single) piece of food
    pub food: Position,

    /// Increased by [`FOOD_REWARD`][consts::FOOD_REWARD] for each food eaten
    pub score: u32,

    /// Terminal once set: advancing a finished game changes nothing
    pub game_over: bool,

    pub mode: BoundaryMode,

    /// Fixed for the whole game
    pub grid_size: GridSize,
}

impl GameState {
    /// Create the state a new game starts in: a three-cell snake in the
    /// center of the grid heading up, and food placed somewhere off the
    /// snake.
    pub fn new<R: Rng>(mode: BoundaryMode, grid_size: GridSize, rng: &mut R) -> GameState {
        let snake = Snake::initial(grid_size);
        let food = generate_food(&snake, grid_size, rng);
        GameState {
            snake,
            direction: Direction::Up,
            food,
            score: 0,
            game_over: false,
            mode,
            grid_size,
        }
    }

    /// Compute the state one tick after `self`.
    ///
    /// `requested` is adopted as the new heading unless it would reverse the
    /// snake onto itself, in which case it is ignored.  Hitting a wall (in
    /// [`BoundaryMode::Walls`]) or the snake's own body ends the game; the
    /// returned state is then identical to `self` apart from `game_over`.
    ///
    /// Once the game is over, this returns an identical copy of `self`.
    pub fn advance<R: Rng>(&self, requested: Option<Direction>, rng: &mut R) -> GameState {
        if self.game_over {
            return self.clone();
        }
        let direction = match requested {
            Some(d) if !self.direction.is_opposite(d) => d,
            _ => self.direction,
        };
        let Some(head) = self.next_head(direction) else {
            return self.ended();
        };
        if check_self_collision(head, &self.snake) {
            return self.ended();
        }
        let ate = head == self.food;
        let snake = self.snake.slither(head, ate);
        let (food, score) = if ate {
            (
                generate_food(&snake, self.grid_size, rng),
                self.score.saturating_add(consts::FOOD_REWARD),
            )
        } else {
            (self.food, self.score)
        };
        GameState {
            snake,
            direction,
            food,
            score,
            game_over: false,
            mode: self.mode,
            grid_size: self.grid_size,
        }
    }

    /// Return where the snake's head would end up after moving one cell in
    /// `direction`, or `None` if that would take it through a wall
    pub(crate) fn next_head(&self, direction: Direction) -> Option<Position> {
        let pos = self.snake.head().step(direction);
        match self.mode {
            BoundaryMode::Wrap => Some(pos.wrap(self.grid_size)),
            BoundaryMode::Walls => (!pos.is_out_of_bounds(self.grid_size)).then_some(pos),
        }
    }

    fn ended(&self) -> GameState {
        GameState {
            game_over: true,
            ..self.clone()
        }
    }
}

/// Returns `true` if `head` lies on any segment of `body`, the head segment
/// included
pub fn check_self_collision(head: Position, body: &Snake) -> bool {
    body.contains(head)
}
