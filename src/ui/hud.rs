use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameSession;

/// Renders the one-line score/speed strip and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled("Score ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Speed ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.speed_level().to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Length ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.snake.len().to_string(),
            Style::default().fg(Color::White),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
