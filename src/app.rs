//! Application state and core logic

use crate::auth::{
    AttemptId, AuthError, AuthPort, PendingAuth, SubmissionController, SubmissionOutcome,
};
use crate::config::TuiConfig;
use crate::state::{AppState, BookingTab, Fixtures, Form, FormKind, SplashState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Results delivered back to the event loop from background tasks
#[derive(Debug)]
pub enum AppEvent {
    AuthFinished {
        kind: FormKind,
        attempt: AttemptId,
        result: Result<(), AuthError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Login form and its submission state
    pub login: SubmissionController,
    /// Signup form and its submission state
    pub signup: SubmissionController,
    /// Read-only data for the booking screens
    pub fixtures: Fixtures,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// When the app started, drives the busy spinner
    pub started_at: Instant,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, port: Arc<dyn AuthPort>, fixtures: Fixtures) -> Self {
        let timeout = config.auth_timeout();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            login: SubmissionController::new(FormKind::Login, Arc::clone(&port), timeout),
            signup: SubmissionController::new(FormKind::Signup, port, timeout),
            fixtures,
            splash_state: Some(SplashState::new()),
            started_at: Instant::now(),
            events_tx,
            events_rx,
            quit: false,
        };
        if config.skip_splash() {
            app.finish_splash();
        }
        app
    }

    /// Advance time-based state: splash animation, toast expiry, finished tasks
    pub fn tick(&mut self, terminal_height: u16) {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
            }
        }
        self.state.toasts.expire(Instant::now());
        self.process_events();
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.navigate(View::Login);
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Controller behind a credential form
    pub fn controller(&self, kind: FormKind) -> &SubmissionController {
        match kind {
            FormKind::Login => &self.login,
            FormKind::Signup => &self.signup,
        }
    }

    fn controller_mut(&mut self, kind: FormKind) -> &mut SubmissionController {
        match kind {
            FormKind::Login => &mut self.login,
            FormKind::Signup => &mut self.signup,
        }
    }

    /// Navigate to a view. Entering a form view starts that form afresh.
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        match view {
            View::Login => self.login.reset(),
            View::Signup => self.signup.reset(),
            View::Booking => self.state.booking = Default::default(),
            View::Splash => {}
        }
        self.state.current_view = view;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Login => self.handle_form_key(FormKind::Login, key),
            View::Signup => self.handle_form_key(FormKind::Signup, key),
            View::Booking => self.handle_booking_key(key),
        }
        Ok(())
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.finish_splash();
    }

    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl && kind == FormKind::Login => self.navigate(View::Signup),
            KeyCode::Char('l') if ctrl && kind == FormKind::Signup => self.navigate(View::Login),
            KeyCode::Esc if kind == FormKind::Signup => self.navigate(View::Login),
            KeyCode::Char('s') if ctrl => self.submit(kind),
            KeyCode::Char('r') if ctrl => self.controller_mut(kind).form_mut().toggle_reveal(),
            KeyCode::Tab | KeyCode::Down => self.controller_mut(kind).form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller_mut(kind).form_mut().prev_field(),
            KeyCode::Enter => {
                // "Next" on inner fields, "done" on the last one
                if self.controller(kind).form().is_last_field() {
                    self.submit(kind);
                } else {
                    self.controller_mut(kind).form_mut().next_field();
                }
            }
            KeyCode::Backspace => self.controller_mut(kind).pop_char(),
            KeyCode::Char(c) if !ctrl => self.controller_mut(kind).push_char(c),
            _ => {}
        }
    }

    /// Submit a form; a valid one starts its authentication call in the background
    fn submit(&mut self, kind: FormKind) {
        if let Some(pending) = self.controller_mut(kind).submit() {
            self.spawn_auth(kind, pending);
        }
    }

    fn spawn_auth(&self, kind: FormKind, pending: PendingAuth) {
        let tx = self.events_tx.clone();
        tracing::debug!(request = ?pending.request(), "spawning authentication");
        let attempt = pending.attempt();
        tokio::spawn(async move {
            let result = pending.run().await;
            let _ = tx.send(AppEvent::AuthFinished {
                kind,
                attempt,
                result,
            });
        });
    }

    /// Apply every event that background tasks have sent so far
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthFinished {
                kind,
                attempt,
                result,
            } => {
                match self.controller_mut(kind).complete(attempt, result) {
                    Some(SubmissionOutcome::Succeeded) => self.on_auth_success(kind),
                    Some(SubmissionOutcome::Failed(message)) => self.state.notify(message),
                    None => tracing::debug!(?kind, "ignoring result of abandoned attempt"),
                }
            }
        }
    }

    fn on_auth_success(&mut self, kind: FormKind) {
        if let Some(message) = kind.success_message() {
            self.state.notify(message);
        }
        match kind {
            FormKind::Login => self.navigate(View::Booking),
            FormKind::Signup => self.navigate(View::Login),
        }
    }

    fn handle_booking_key(&mut self, key: KeyEvent) {
        let booking = &mut self.state.booking;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => booking.tab = BookingTab::Home,
            KeyCode::Char('2') => booking.tab = BookingTab::Bookings,
            KeyCode::Char('3') => booking.tab = BookingTab::Profile,
            KeyCode::Tab => booking.tab = booking.tab.next(),
            _ if booking.tab != BookingTab::Home => {}
            KeyCode::Left => booking.prev_date(),
            KeyCode::Right => booking.next_date(self.fixtures.dates.len()),
            KeyCode::Up => booking.prev_movie(),
            KeyCode::Down => booking.next_movie(self.fixtures.movies.len()),
            KeyCode::Char('t') => {
                let count = self
                    .fixtures
                    .movies
                    .get(booking.selected_movie_index)
                    .map_or(0, |m| m.show_times.len());
                booking.cycle_show_time(count);
            }
            KeyCode::Enter => self.book_selected(),
            _ => {}
        }
    }

    /// "Book" the selected showtime. There is no booking engine; this only notifies.
    fn book_selected(&mut self) {
        let booking = &self.state.booking;
        if let Some(movie) = self.fixtures.movies.get(booking.selected_movie_index) {
            let message = format!(
                "Booked {} at {}",
                movie.title,
                movie.show_time(booking.selected_show_time_index)
            );
            tracing::info!(%message, "booking");
            self.state.notify(message);
        }
    }

    /// Request quit (Ctrl+C)
    pub fn request_quit(&mut self) {
        self.quit = true;
    }
}
