//! Booking shell: Home, Bookings and Profile tabs

use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{BookingRecord, BookingTab, Fixtures, Movie};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

const EMPTY_BOOKINGS: &str = "Your upcoming and past tickets will appear here.";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = BookingTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.state.booking.tab.index())
        .block(Block::default().borders(Borders::ALL).title(" FlicksNow "))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    match app.state.booking.tab {
        BookingTab::Home => draw_home(frame, chunks[1], app),
        BookingTab::Bookings => draw_bookings(frame, chunks[1], &app.fixtures),
        BookingTab::Profile => draw_profile(frame, chunks[1], &app.fixtures),
    }
}

fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let booking = &app.state.booking;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Date strip
            Constraint::Min(0),    // Movies
        ])
        .split(area);

    // Date strip
    let mut label_spans = Vec::new();
    let mut day_spans = Vec::new();
    for (i, date) in app.fixtures.dates.iter().enumerate() {
        let style = if i == booking.selected_date_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        label_spans.push(Span::styled(format!(" {:^9} ", date.label), style));
        label_spans.push(Span::raw(" "));
        day_spans.push(Span::styled(format!(" {:^9} ", date.day), style));
        day_spans.push(Span::raw(" "));
    }
    let strip = Paragraph::new(vec![Line::from(label_spans), Line::from(day_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select date (←/→) "),
    );
    frame.render_widget(strip, chunks[0]);

    // Movie list
    let items: Vec<ListItem> = app
        .fixtures
        .movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let selected = i == booking.selected_movie_index;
            movie_item(movie, selected, booking.selected_show_time_index)
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now showing (↑/↓, t: time, Enter: book) "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let selected = if app.fixtures.movies.is_empty() {
        None
    } else {
        Some(booking.selected_movie_index)
    };
    render_scrollable_list(frame, chunks[1], list, selected);
}

fn movie_item(movie: &Movie, selected: bool, show_time_index: usize) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ★ {}  {}", movie.rating, movie.certificate),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    let details = Line::from(Span::styled(
        format!("{} | {} | {}", movie.genre, movie.duration, movie.language),
        Style::default().fg(Color::Gray),
    ));

    let time_spans: Vec<Span> = if movie.show_times.is_empty() {
        vec![Span::styled("No shows", Style::default().fg(Color::DarkGray))]
    } else {
        movie
            .show_times
            .iter()
            .enumerate()
            .flat_map(|(i, time)| {
                let style = if selected && i == show_time_index {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                [Span::styled(format!(" {time} "), style), Span::raw(" ")]
            })
            .collect()
    };

    ListItem::new(vec![title, details, Line::from(time_spans), Line::from("")])
}

fn booking_line(record: &BookingRecord) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            record.movie_title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", record.starts_at.format("%a %d %b, %H:%M")),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  Seats: {}", record.seats.join(", ")),
            Style::default().fg(Color::Cyan),
        ),
    ])
}

fn draw_bookings(frame: &mut Frame, area: Rect, fixtures: &Fixtures) {
    let block = Block::default().borders(Borders::ALL).title(" My bookings ");

    if fixtures.bookings.is_empty() {
        let empty = Paragraph::new(Span::styled(
            EMPTY_BOOKINGS,
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = fixtures
        .bookings
        .iter()
        .map(|record| ListItem::new(booking_line(record)))
        .collect();
    render_scrollable_list(frame, area, List::new(items).block(block), None);
}

fn draw_profile(frame: &mut Frame, area: Rect, fixtures: &Fixtures) {
    let profile = &fixtures.profile;
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email  ", label),
            Span::raw(profile.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("City   ", label),
            Span::raw(profile.city.clone()),
        ]),
        Line::from(vec![
            Span::styled("Tickets ", label),
            Span::raw(fixtures.bookings.len().to_string()),
        ]),
    ];
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Profile "));
    frame.render_widget(card, area);
}
