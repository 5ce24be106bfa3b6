//! Credential form rendering

mod auth_form;
mod field_renderer;

pub use auth_form::draw_auth_form;
