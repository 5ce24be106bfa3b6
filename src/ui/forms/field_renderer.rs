//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its inline error underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let has_error = field.error.is_some();
    let border_style = match (is_active, has_error) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Yellow),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let mut title = format!(" {} ", field.name.label());
    if field.name.is_secret() && is_active {
        let toggle = if field.revealed { "HIDE" } else { "SHOW" };
        title = format!(" {} (^R {toggle}) ", field.name.label());
    }

    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, text_style),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ]));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), input_area);

    if let Some(error) = &field.error {
        if area.height > 3 {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + 3,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
            frame.render_widget(Paragraph::new(line), error_area);
        }
    }
}
