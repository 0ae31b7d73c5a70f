//! Sign-up screen rendering

use super::components::{draw_field, render_submit_button, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::layout::{self, LOGO_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::centered_card(
        area,
        50,
        LOGO_HEIGHT + 2 + FIELD_HEIGHT * 3 + BUTTON_HEIGHT + 2,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // E-mail
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1), // Back hint
        ])
        .split(card);

    let form = &app.state.sign_up;
    layout::draw_logo(frame, chunks[0]);
    layout::draw_title(frame, chunks[1], "Signing up");
    draw_field(frame, chunks[3], &form.name, form.active_field_index == 0);
    draw_field(frame, chunks[4], &form.email, form.active_field_index == 1);
    draw_field(frame, chunks[5], &form.password, form.active_field_index == 2);
    render_submit_button(frame, chunks[6], "Sign up", app.state.submitting);
    layout::draw_hint(frame, chunks[8], "Esc: back to logon");
}
