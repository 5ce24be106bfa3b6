//! Transient notification overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a toast may grow, borders included
const MAX_TOAST_WIDTH: u16 = 60;

/// Area for a toast: centred horizontally, just above the status bar
pub fn toast_area(screen: Rect, message: &str) -> Rect {
    let content_width = message.chars().count() as u16 + 4;
    let width = content_width.min(MAX_TOAST_WIDTH).min(screen.width);
    let height = 3u16.min(screen.height);
    Rect {
        x: screen.x + (screen.width.saturating_sub(width)) / 2,
        y: screen.y + screen.height.saturating_sub(height + 2),
        width,
        height,
    }
}

/// Render a toast over whatever is on screen
pub fn render_toast(frame: &mut Frame, message: &str) {
    let area = toast_area(frame.area(), message);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
