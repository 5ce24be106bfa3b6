//! Application state definitions

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    #[default]
    Splash,
    Login,
    Signup,
    Booking,
}

/// Tabs of the booking shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingTab {
    #[default]
    Home,
    Bookings,
    Profile,
}

impl BookingTab {
    pub const ALL: [BookingTab; 3] = [BookingTab::Home, BookingTab::Bookings, BookingTab::Profile];

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Bookings,
            Self::Bookings => Self::Profile,
            Self::Profile => Self::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Bookings => "Bookings",
            Self::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Bookings => 1,
            Self::Profile => 2,
        }
    }
}

/// Selection state of the booking screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    pub tab: BookingTab,
    pub selected_date_index: usize,
    pub selected_movie_index: usize,
    pub selected_show_time_index: usize,
}

impl BookingState {
    pub fn next_date(&mut self, date_count: usize) {
        if self.selected_date_index + 1 < date_count {
            self.selected_date_index += 1;
        }
    }

    pub fn prev_date(&mut self) {
        self.selected_date_index = self.selected_date_index.saturating_sub(1);
    }

    pub fn next_movie(&mut self, movie_count: usize) {
        if self.selected_movie_index + 1 < movie_count {
            self.selected_movie_index += 1;
            self.selected_show_time_index = 0;
        }
    }

    pub fn prev_movie(&mut self) {
        if self.selected_movie_index > 0 {
            self.selected_movie_index -= 1;
            self.selected_show_time_index = 0;
        }
    }

    /// Cycle through the selected movie's showtimes
    pub fn cycle_show_time(&mut self, show_time_count: usize) {
        if show_time_count > 0 {
            self.selected_show_time_index = (self.selected_show_time_index + 1) % show_time_count;
        }
    }
}

/// A short-lived, non-blocking message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Transient notifications, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// How long a toast stays on screen
    pub const LIFETIME: Duration = Duration::from_millis(2500);

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "toast");
        self.toasts.push_back(Toast {
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drop toasts older than [`Self::LIFETIME`]
    pub fn expire(&mut self, now: Instant) {
        while let Some(front) = self.toasts.front() {
            if now.saturating_duration_since(front.shown_at) >= Self::LIFETIME {
                self.toasts.pop_front();
            } else {
                break;
            }
        }
    }

    /// Most recent toast, if any
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Top-level UI state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub booking: BookingState,
    pub toasts: ToastQueue,
}

impl AppState {
    /// Show a transient notification
    pub fn notify(&mut self, message: impl Into<String>) {
        self.toasts.push(message);
    }
}
