use std::io;
use std::time::Duration;

use clap::Parser;

use arcade_snake::config::{
    ConfigError, Grid, DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
};
use arcade_snake::game::{GameSession, SessionStatus};
use arcade_snake::input::{poll_input, GameInput};
use arcade_snake::renderer::render_session;
use arcade_snake::scheduler::TickClock;
use arcade_snake::speed::SpeedLevel;
use arcade_snake::terminal_runtime::{GameTerminal, TerminalGuard};
use arcade_snake::ui::menu::render_start_menu;

/// How long one loop iteration waits for input before checking the clock.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(5);

#[derive(Debug, Parser)]
#[command(name = "arcade-snake", version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Initial speed level (1-9; higher is faster).
    #[arg(long, default_value_t = 5)]
    speed: u8,

    /// Playfield width in pixels; must be a multiple of the cell size.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    grid_width: u16,

    /// Playfield height in pixels; must be a multiple of the cell size.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    grid_height: u16,

    /// Edge length of one grid cell in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Seed for a reproducible session (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let grid =
        Grid::new(cli.grid_width, cli.grid_height, cli.cell_size).map_err(invalid_input)?;
    SpeedLevel::new(cli.speed).map_err(invalid_input)?;

    let mut terminal = TerminalGuard::enter()?;
    run(terminal.terminal_mut(), grid, &cli)
}

fn run(terminal: &mut GameTerminal, grid: Grid, cli: &Cli) -> io::Result<()> {
    let mut selected_level = cli.speed;
    let mut session: Option<GameSession> = None;
    let mut clock = TickClock::new();

    loop {
        terminal.draw(|frame| match &session {
            Some(active) => render_session(frame, active),
            None => render_start_menu(frame, frame.area(), selected_level),
        })?;

        if let Some(input) = poll_input(INPUT_POLL_TIMEOUT)? {
            match input {
                GameInput::Quit => {
                    if let Some(active) = session.as_mut() {
                        active.stop();
                    }
                    return Ok(());
                }
                GameInput::Confirm => match session.as_ref().map(|active| active.status) {
                    None => {
                        session = Some(start_session(grid, selected_level, cli.seed)?);
                        clock = TickClock::new();
                    }
                    Some(SessionStatus::GameOver | SessionStatus::Stopped) => {
                        session = None;
                    }
                    Some(SessionStatus::Running) => {}
                },
                GameInput::SpeedLevel(level) => match session.as_mut() {
                    Some(active) => {
                        // The key mapping only produces 1..=9, so this
                        // cannot fail; log it rather than crash mid-game.
                        if let Err(error) = active.set_speed_level(level) {
                            log::warn!("rejected speed change: {error}");
                        }
                    }
                    None => selected_level = level,
                },
                GameInput::Direction(direction) => {
                    if let Some(active) = session.as_mut() {
                        active.request_direction_change(direction);
                    }
                }
            }
        }

        if let Some(active) = session.as_mut() {
            if active.status == SessionStatus::Running && clock.poll(active.tick_interval()) {
                active.tick();
            }
        }
    }
}

fn start_session(grid: Grid, level: u8, seed: Option<u64>) -> io::Result<GameSession> {
    let session = match seed {
        Some(seed) => GameSession::start_with_seed(grid, level, seed),
        None => GameSession::start(grid, level),
    };
    session.map_err(invalid_input)
}

fn invalid_input(error: ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error)
}
