//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{BookingTab, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
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

    let hints = get_view_hints(app.state.current_view, app.state.booking.tab);
    let spans = vec![
        Span::styled(" FlicksNow ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = if app.in_splash() { "" } else { " ^C:quit " };
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

/// Get keyboard hints for the current view
fn get_view_hints(view: View, tab: BookingTab) -> &'static str {
    match view {
        View::Splash => "Press any key to skip",
        View::Login => "Tab:next  Enter:next/sign in  ^S:sign in  ^R:show/hide  ^N:create account",
        View::Signup => "Tab:next  Enter:next/create  ^S:create  ^R:show/hide  Esc:sign in",
        View::Booking => match tab {
            BookingTab::Home => "1/2/3:tab  ←/→:date  ↑/↓:movie  t:time  Enter:book  q:quit",
            BookingTab::Bookings | BookingTab::Profile => "1/2/3:tab  Tab:next tab  q:quit",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let main = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(main.width, 80);
    }

    #[test]
    fn test_hints_follow_booking_tab() {
        assert!(get_view_hints(View::Booking, BookingTab::Home).contains("Enter:book"));
        assert!(!get_view_hints(View::Booking, BookingTab::Profile).contains("Enter:book"));
    }
}
