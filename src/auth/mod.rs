//! Authentication module: the port the submission flow talks to, plus the demo adapter

mod controller;
mod error;
mod simulated;
mod traits;

pub use controller::{
    AttemptId, PendingAuth, SubmissionController, SubmissionOutcome, DEFAULT_AUTH_TIMEOUT,
};
pub use error::AuthError;
pub use simulated::SimulatedAuth;
pub use traits::{AuthPort, AuthRequest};

#[cfg(test)]
pub use traits::MockAuthPort;
