use rand::Rng;

use crate::config::Grid;
use crate::snake::{Position, Snake};

/// Food item currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food at a random cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Self {
        Self::at(free_position(rng, grid, snake))
    }
}

/// Draws a uniformly random cell from the set of cells the snake does not
/// occupy.
#[must_use]
pub fn free_position<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Position {
    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(grid.rows()) {
        for x in 0..i32::from(grid.cols()) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "free_position: no free cells on a {}x{} board",
        grid.cols(),
        grid.rows(),
    );

    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Grid;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::free_position;

    #[test]
    fn food_never_spawns_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(200, 150, 25).unwrap();
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );

        for _ in 0..100 {
            let position = free_position(&mut rng, grid, &snake);
            assert!(!snake.occupies(position));
            assert!(position.is_within_bounds(grid));
        }
    }
}
