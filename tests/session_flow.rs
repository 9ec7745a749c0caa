use std::time::Duration;

use arcade_snake::config::Grid;
use arcade_snake::food::Food;
use arcade_snake::game::{GameSession, SessionStatus, TickOutcome};
use arcade_snake::input::Direction;
use arcade_snake::snake::{Position, Snake};

fn p(x: i32, y: i32) -> Position {
    Position { x, y }
}

#[test]
fn stepwise_food_turn_wrap_and_stop() {
    // 6x4 cells.
    let grid = Grid::new(150, 100, 25).expect("aligned grid");
    let mut session = GameSession::start_with_seed(grid, 2, 42).expect("level 2 is valid");
    assert_eq!(session.tick_interval(), Duration::from_millis(80));

    session.snake = Snake::from_segments(vec![p(1, 1), p(0, 1), p(0, 0)], Direction::Right);
    session.food = Food::at(p(2, 1));

    // Eat the food directly ahead.
    assert_eq!(session.tick(), TickOutcome::AteFood);
    assert_eq!(session.score, 1);
    assert_eq!(session.snake.len(), 4);
    assert_eq!(session.snake.head(), p(2, 1));
    assert!(!session.snake.occupies(session.food.position));

    // Park the food out of the way to keep the walk deterministic.
    session.food = Food::at(p(5, 3));

    // Turn up and walk off the top edge; the head wraps to the bottom row.
    session.request_direction_change(Direction::Up);
    assert_eq!(session.tick(), TickOutcome::Moved);
    assert_eq!(session.snake.head(), p(2, 0));

    assert_eq!(session.tick(), TickOutcome::Moved);
    assert_eq!(session.snake.head(), p(2, 3));
    assert_eq!(session.status, SessionStatus::Running);

    // Growth invariant holds after the whole sequence.
    assert_eq!(session.snake.len() as u32, 3 + session.score);

    // Stopping takes effect before any further tick.
    session.stop();
    let ticks_before = session.tick_count;
    assert_eq!(session.tick(), TickOutcome::Stopped);
    assert_eq!(session.tick_count, ticks_before);
}

#[test]
fn retuning_speed_mid_session_changes_only_the_cadence() {
    let grid = Grid::new(600, 600, 25).expect("aligned grid");
    let mut session = GameSession::start_with_seed(grid, 1, 7).expect("level 1 is valid");
    assert_eq!(session.tick_interval(), Duration::from_millis(90));

    session.snake = Snake::spawn_centered(grid, Direction::Right);
    session.food = Food::at(session.snake.head().stepped(Direction::Right));
    assert_eq!(session.tick(), TickOutcome::AteFood);

    let food_before = session.food;
    session.set_speed_level(9).expect("level 9 is valid");

    assert_eq!(session.tick_interval(), Duration::from_millis(10));
    assert_eq!(session.score, 1);
    assert_eq!(session.snake.len(), 4);
    assert_eq!(session.food, food_before);
    assert_eq!(session.status, SessionStatus::Running);
}
