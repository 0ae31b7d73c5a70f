//! Toast overlay rendering

use crate::state::ToastQueue;
use crate::submit::NotificationKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of a toast box
const TOAST_WIDTH: u16 = 44;
/// Height of a toast box (border + title + description + border)
const TOAST_HEIGHT: u16 = 4;

fn toast_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Blue,
    }
}

/// Draw live toasts stacked in the top-right corner
pub fn draw_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    if toasts.is_empty() {
        return;
    }
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for toast in toasts.iter() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = toast_color(toast.kind);

        let body = Paragraph::new(vec![
            Line::styled(
                toast.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Line::raw(toast.description.clone()),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);

        y += TOAST_HEIGHT + 1;
    }
}
