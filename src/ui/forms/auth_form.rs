//! Login and signup screens

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormKind};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 52;
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const SPINNER_INTERVAL_MS: u128 = 120;

fn spinner_frame(elapsed_ms: u128) -> &'static str {
    let index = (elapsed_ms / SPINNER_INTERVAL_MS) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

fn footer_hint(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Don't have an account? Press ^N to sign up",
        FormKind::Signup => "Already have an account? Press Esc to sign in",
    }
}

/// Draw the login or signup form owned by `app`
pub fn draw_auth_form(frame: &mut Frame, area: Rect, app: &App, kind: FormKind) {
    let controller = app.controller(kind);
    let form = controller.form();
    let field_count = form.fields().len() as u16;

    let width = FORM_WIDTH.min(area.width);
    let inner_height = 2 + field_count * FIELD_HEIGHT + BUTTON_HEIGHT + 2;
    let height = (inner_height + 2).min(area.height);
    let form_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend((0..field_count).map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "FlicksNow",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let active = form.active_field();
    for (i, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[i + 1], field, i == active);
    }

    let button_index = field_count as usize + 1;
    let label = if controller.is_busy() {
        let elapsed = app.started_at.elapsed().as_millis();
        format!("{} {}", spinner_frame(elapsed), kind.submit_label())
    } else {
        kind.submit_label().to_string()
    };
    render_button(frame, chunks[button_index], &label, !controller.is_busy());

    let footer = Paragraph::new(Span::styled(
        footer_hint(kind),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[button_index + 1]);
}
