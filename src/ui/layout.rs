//! Layout helpers (centered card, logo, status bar)

use crate::app::App;
use crate::state::Screen;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Block-letter logo shown on every screen
const LOGO: &[&str] = &[
    r" ____             _",
    r"| __ )  __ _ _ __| |__   ___ _ __",
    r"|  _ \ / _` | '__| '_ \ / _ \ '__|",
    r"| |_) | (_| | |  | |_) |  __/ |",
    r"|____/ \__,_|_|  |_.__/ \___|_|",
];

/// Rows taken by the logo
pub const LOGO_HEIGHT: u16 = LOGO.len() as u16;

/// Split off the bottom status-bar row
pub fn content_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Center a card of the given size within `area`, clamped to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the logo centered in `area`
pub fn draw_logo(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::styled(*l, Style::default().fg(Color::Yellow)))
        .collect();
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

/// Draw the screen title (the card's heading)
pub fn draw_title(frame: &mut Frame, area: Rect, title: &str) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(ratatui::style::Modifier::BOLD),
        ))
        .centered(),
        area,
    );
}

/// Draw a dimmed footer hint inside a card
pub fn draw_hint(frame: &mut Frame, area: Rect, hint: &str) {
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let state_dot = if app.state.submitting {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(state_dot);

    // View-specific hints
    let hints = get_screen_hints(app.state.current_screen());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Current route
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.state.current_screen().path(),
        Style::default().fg(Color::Cyan),
    ));

    // API address
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.api.address().to_string(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current screen
fn get_screen_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::SignIn => "Tab:next  Enter:sign in  ^U:sign up  ^R:recover password",
        Screen::SignUp => "Tab:next  Enter:sign up  Esc:back",
        Screen::ForgotPassword => "Enter:recover  Esc:back",
        Screen::ResetPassword => "Tab:next  Enter:reset  Esc:back",
        Screen::Dashboard => "Esc:sign out  q:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_card_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let card = centered_card(area, 50, 20);
        assert_eq!(card.x, 25);
        assert_eq!(card.y, 10);
        assert_eq!(card.width, 50);
        assert_eq!(card.height, 20);
    }

    #[test]
    fn test_centered_card_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let card = centered_card(area, 50, 20);
        assert_eq!(card.width, 30);
        assert_eq!(card.height, 10);
    }

    #[test]
    fn test_content_area_reserves_status_row() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(content_area(area).height, 23);
    }
}
