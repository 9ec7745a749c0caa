use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Grid, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD};
use crate::game::{GameSession, SessionStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders one full frame of a session from immutable state.
pub fn render_session(frame: &mut Frame<'_>, session: &GameSession) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session);

    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, session);
    render_snake(frame, inner, session);

    if session.status == SessionStatus::GameOver {
        render_game_over_menu(frame, play_area, session.score);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let Some((x, y)) = cell_to_terminal(inner, session.grid(), session.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::default().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let head = session.snake.head();

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, session.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::default().fg(Color::Green));
        }
    }
}

/// Maps a logical cell to a terminal coordinate inside the play area, or
/// `None` when the cell falls outside the visible region.
fn cell_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
