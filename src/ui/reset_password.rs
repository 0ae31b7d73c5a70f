//! Reset-password screen rendering

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
        LOGO_HEIGHT + 2 + FIELD_HEIGHT * 2 + BUTTON_HEIGHT + 2,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT), // New password
            Constraint::Length(FIELD_HEIGHT), // Confirmation
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1), // Back hint
        ])
        .split(card);

    let form = &app.state.reset_password;
    layout::draw_logo(frame, chunks[0]);
    layout::draw_title(frame, chunks[1], "Reset password");
    draw_field(frame, chunks[3], &form.password, form.active_field_index == 0);
    draw_field(
        frame,
        chunks[4],
        &form.password_confirmation,
        form.active_field_index == 1,
    );
    render_submit_button(frame, chunks[5], "Reset password", app.state.submitting);
    layout::draw_hint(frame, chunks[7], "Esc: back to login");
}
