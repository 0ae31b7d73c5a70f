//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forgot_password;
mod layout;
mod reset_password;
mod sign_in;
mod sign_up;

use crate::app::App;
use crate::state::Screen;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content = layout::content_area(area);

    match app.state.current_screen() {
        Screen::SignIn => sign_in::draw(frame, content, app),
        Screen::SignUp => sign_up::draw(frame, content, app),
        Screen::ForgotPassword => forgot_password::draw(frame, content, app),
        Screen::ResetPassword => reset_password::draw(frame, content, app),
        Screen::Dashboard => dashboard::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);

    // Toasts render above everything else
    components::draw_toasts(frame, content, &app.state.toasts);
}
