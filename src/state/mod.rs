//! Application state module

mod app_state;
mod fixtures;
mod forms;
mod splash_state;

pub use app_state::*;
pub use fixtures::*;
pub use forms::*;
pub use splash_state::*;
