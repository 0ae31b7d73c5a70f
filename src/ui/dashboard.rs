//! Dashboard screen rendering

use super::layout::{self, LOGO_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::centered_card(area, 60, LOGO_HEIGHT + 5);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1), // Greeting
            Constraint::Length(1), // E-mail line
            Constraint::Length(1),
            Constraint::Length(1), // Hint
        ])
        .split(card);

    layout::draw_logo(frame, chunks[0]);

    let (greeting, email) = match &app.state.session_user {
        Some(user) => (format!("Welcome, {}!", user.name), user.email.clone()),
        None => ("Welcome!".to_string(), String::new()),
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            greeting,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(email, Style::default().fg(Color::Gray))).centered(),
        chunks[3],
    );

    layout::draw_hint(frame, chunks[5], "Esc: sign out");
}
