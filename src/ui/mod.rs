//! UI module for rendering the TUI

mod booking;
mod components;
mod forms;
mod layout;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::{FormKind, View};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_area = layout::create_layout(area);

    match app.state.current_view {
        View::Splash => {
            if let Some(ref splash_state) = app.splash_state {
                splash::draw(frame, main_area, splash_state);
            }
        }
        View::Login => forms::draw_auth_form(frame, main_area, app, FormKind::Login),
        View::Signup => forms::draw_auth_form(frame, main_area, app, FormKind::Signup),
        View::Booking => booking::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if let Some(toast) = app.state.toasts.current() {
        components::render_toast(frame, &toast.message);
    }
}
