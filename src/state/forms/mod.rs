//! Form domain layer
//!
//! Credential forms (login, signup), their validators, and the submission
//! state machine that gates calls to the authentication port.

mod field;
mod form_state;
mod submission;
mod validators;

pub use field::{FieldName, FormField};
pub use form_state::{Form, FormKind, FormState};
pub use submission::{Action, AuthFlow, Effect, SubmissionState};
