//! Simulation core and terminal shell for a classic grid snake game.
//!
//! The game logic lives in [`game::GameSession`]: a self-contained value that
//! is advanced one tick at a time by an external driver. Everything under
//! [`renderer`], [`ui`], and [`terminal_runtime`] is presentation glue around
//! that core.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod ui;
