use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, Grid};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;
use crate::speed::SpeedLevel;

/// Headings a new session may start with.
///
/// `Left` is excluded: the initial body extends left of the head, so the
/// first move would immediately overlap the second segment.
const STARTING_HEADINGS: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Right];

/// Lifecycle state of one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Running,
    Stopped,
    GameOver,
}

/// Result of advancing the simulation by one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved one cell; nothing else happened.
    Moved,
    /// The snake moved onto the food cell and grew.
    AteFood,
    /// The snake collided with itself; the session is over.
    GameOver,
    /// The session is stopped; the tick was a no-op.
    Stopped,
}

/// Complete state of one play-through.
///
/// A session is an explicit value: the engine keeps no process-wide state,
/// so multiple sessions can coexist and tests drive `tick` directly.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: SessionStatus,
    pub tick_count: u64,
    grid: Grid,
    speed: SpeedLevel,
    rng: StdRng,
}

impl GameSession {
    /// Starts a session at the given speed level with entropy-seeded
    /// randomness.
    ///
    /// Fails with [`ConfigError::SpeedOutOfRange`] when `level` is outside
    /// `1..=9`.
    pub fn start(grid: Grid, level: u8) -> Result<Self, ConfigError> {
        Self::with_rng(grid, level, StdRng::from_entropy())
    }

    /// Starts a deterministic session for tests and reproducible runs.
    pub fn start_with_seed(grid: Grid, level: u8, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(grid, level, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, level: u8, mut rng: StdRng) -> Result<Self, ConfigError> {
        let speed = SpeedLevel::new(level)?;

        let heading = STARTING_HEADINGS[rng.gen_range(0..STARTING_HEADINGS.len())];
        let snake = Snake::spawn_centered(grid, heading);
        let food = Food::spawn(&mut rng, grid, &snake);

        info!("session started; speed={level} heading={heading:?}");

        Ok(Self {
            snake,
            food,
            score: 0,
            status: SessionStatus::Running,
            tick_count: 0,
            grid,
            speed,
            rng,
        })
    }

    /// Buffers a direction change to be applied on the next tick.
    ///
    /// Reversals of the current heading are silently ignored; valid requests
    /// overwrite any earlier one made since the last tick. No-op unless the
    /// session is running.
    pub fn request_direction_change(&mut self, direction: Direction) {
        if self.status != SessionStatus::Running {
            return;
        }

        if self.snake.request_turn(direction) {
            debug!("turn buffered: {direction:?}");
        } else {
            debug!("reversal ignored: {direction:?}");
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Only a running session moves; a terminal session returns its terminal
    /// outcome unchanged. One tick applies the buffered heading, shifts the
    /// body one cell, resolves food, then self-collision, then toroidal
    /// wrapping of the head.
    pub fn tick(&mut self) -> TickOutcome {
        match self.status {
            SessionStatus::Running => {}
            SessionStatus::Stopped => return TickOutcome::Stopped,
            SessionStatus::GameOver => return TickOutcome::GameOver,
        }

        self.tick_count += 1;
        let vacated_tail = self.snake.advance();

        let mut outcome = TickOutcome::Moved;
        if self.snake.head() == self.food.position {
            self.score += 1;
            // Growth re-appends the cell the shift just vacated, so the
            // snake keeps its full footprint this tick.
            self.snake.extend_tail(vacated_tail);
            self.food = Food::spawn(&mut self.rng, self.grid, &self.snake);
            info!("food eaten; score={}", self.score);
            outcome = TickOutcome::AteFood;
        }

        if self.snake.head_overlaps_body() {
            self.status = SessionStatus::GameOver;
            info!("game over; final score={}", self.score);
            return TickOutcome::GameOver;
        }

        // Wrapping happens after collision resolution: an off-board head can
        // never overlap the (in-bounds) body, so the terminal tick skips it.
        self.snake.wrap_head(self.grid);
        outcome
    }

    /// Retunes the difficulty of a live session.
    ///
    /// Only the cadence of future ticks changes; score, snake, and food are
    /// untouched. The driver picks up the new interval on its next re-arm.
    pub fn set_speed_level(&mut self, level: u8) -> Result<(), ConfigError> {
        self.speed = SpeedLevel::new(level)?;
        info!("speed level changed to {level}");
        Ok(())
    }

    /// Stops the session. Idempotent; a finished game stays `GameOver`.
    pub fn stop(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Stopped;
            info!("session stopped; score={}", self.score);
        }
    }

    /// Returns the playfield dimensions.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the current speed level value.
    #[must_use]
    pub fn speed_level(&self) -> u8 {
        self.speed.get()
    }

    /// Returns the tick interval the driver should currently honor.
    #[must_use]
    pub fn tick_interval(&self) -> std::time::Duration {
        self.speed.tick_interval()
    }
}
