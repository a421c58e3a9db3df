use super::position::{GridSize, Position};
use super::snake::Snake;
use crate::consts;
use rand::Rng;

/// Pick a random cell for a new piece of food, avoiding `snake`.
///
/// Cells are sampled uniformly; after [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS]
/// rejected samples, the last candidate is returned even if it lies on the
/// snake.  On a nearly-full grid the food may therefore end up under the
/// snake.
pub fn generate_food<R: Rng>(snake: &Snake, grid: GridSize, rng: &mut R) -> Position {
    let mut candidate = random_cell(grid, rng);
    let mut attempts = 1;
    while attempts < consts::MAX_FOOD_ATTEMPTS && snake.contains(candidate) {
        candidate = random_cell(grid, rng);
        attempts += 1;
    }
    if snake.contains(candidate) {
        log::warn!("No free cell after {attempts} tries; food at {candidate}");
    }
    candidate
}

fn random_cell<R: Rng>(grid: GridSize, rng: &mut R) -> Position {
    let n = grid.as_i32();
    Position::new(rng.random_range(0..n), rng.random_range(0..n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn food_avoids_snake() {
        let grid = GridSize::new(5).unwrap();
        // Everything except the bottom row
        let cells = (0..4).flat_map(|y| (0..5).map(move |x| Position::new(x, y)));
        let snake = Snake::new(cells).unwrap();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            let food = generate_food(&snake, grid, &mut rng);
            assert!(!food.is_out_of_bounds(grid));
            assert_eq!(food.y, 4, "food placed at {food}");
        }
    }

    #[test]
    fn food_is_deterministic_given_seed() {
        let grid = GridSize::default();
        let snake = Snake::initial(grid);
        let a = generate_food(&snake, grid, &mut ChaCha12Rng::seed_from_u64(RNG_SEED));
        let b = generate_food(&snake, grid, &mut ChaCha12Rng::seed_from_u64(RNG_SEED));
        assert_eq!(a, b);
    }

    #[test]
    fn full_grid_falls_back_to_occupied_cell() {
        let grid = GridSize::new(5).unwrap();
        let cells = (0..5).flat_map(|y| (0..5).map(move |x| Position::new(x, y)));
        let snake = Snake::new(cells).unwrap();
        let food = generate_food(&snake, grid, &mut ChaCha12Rng::seed_from_u64(RNG_SEED));
        assert!(snake.contains(food));
        assert!(!food.is_out_of_bounds(grid));
    }
}
