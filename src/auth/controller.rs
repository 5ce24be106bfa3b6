//! Drives an [`AuthFlow`] against an [`AuthPort`].
//!
//! The controller never awaits the port itself: `submit` hands back a
//! [`PendingAuth`] that the owner runs wherever it likes (a spawned task in
//! the app) and feeds the result back through `complete`.

use super::{AuthError, AuthPort, AuthRequest};
use crate::state::{Action, AuthFlow, Effect, FieldName, FormKind, FormState, SubmissionState};
use std::sync::Arc;
use std::time::Duration;

/// Default upper bound on one authentication call
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifies one submission attempt of a controller
pub type AttemptId = u64;

/// Final result of one attempt, reported to the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(String),
}

/// An authentication call that passed validation and awaits execution
pub struct PendingAuth {
    port: Arc<dyn AuthPort>,
    request: AuthRequest,
    timeout: Duration,
    attempt: AttemptId,
}

impl PendingAuth {
    pub fn request(&self) -> &AuthRequest {
        &self.request
    }

    /// Attempt to quote back to [`SubmissionController::complete`]
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Issue the call, bounded by the timeout
    pub async fn run(self) -> Result<(), AuthError> {
        tracing::info!(attempt = self.attempt, "authentication started");
        match tokio::time::timeout(self.timeout, self.request.dispatch(self.port.as_ref())).await {
            Ok(result) => result,
            Err(_) => Err(AuthError::Timeout(self.timeout)),
        }
    }
}

/// Owner-facing handle for one credential form
pub struct SubmissionController {
    flow: AuthFlow,
    port: Arc<dyn AuthPort>,
    timeout: Duration,
    /// Bumped on every submit and reset; only the current attempt may complete
    attempt: AttemptId,
}

impl SubmissionController {
    pub fn new(kind: FormKind, port: Arc<dyn AuthPort>, timeout: Duration) -> Self {
        Self {
            flow: AuthFlow::new(kind),
            port,
            timeout,
            attempt: 0,
        }
    }

    fn dispatch(&mut self, action: Action) -> Option<Effect> {
        let kind = self.flow.kind();
        let flow = std::mem::replace(&mut self.flow, AuthFlow::new(kind));
        let (next, effect) = flow.reduce(action);
        self.flow = next;
        effect
    }

    pub fn kind(&self) -> FormKind {
        self.flow.kind()
    }

    pub fn form(&self) -> &FormState {
        &self.flow.form
    }

    /// Mutable access for focus and reveal toggles. Value edits go through `set_field`.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.flow.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.flow.submission
    }

    pub fn is_busy(&self) -> bool {
        self.flow.submission.is_busy()
    }

    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.dispatch(Action::SetField(name, value.into()));
    }

    /// Type a character into the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.flow.form.active() {
            let mut value = field.value.clone();
            value.push(c);
            let name = field.name;
            self.set_field(name, value);
        }
    }

    /// Delete the last character of the focused field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.flow.form.active() {
            let mut value = field.value.clone();
            value.pop();
            let name = field.name;
            self.set_field(name, value);
        }
    }

    pub fn reset(&mut self) {
        self.attempt += 1;
        self.dispatch(Action::Reset);
    }

    /// Validate and, if the form is valid, return the call to run.
    ///
    /// Returns `None` when the submit is rejected (busy or already succeeded)
    /// or when validation fails; per-field errors are then set on the form.
    pub fn submit(&mut self) -> Option<PendingAuth> {
        if self.dispatch(Action::Submit) != Some(Effect::RunValidation) {
            return None;
        }
        match self.dispatch(Action::Validate) {
            Some(Effect::Authenticate(request)) => {
                self.attempt += 1;
                Some(PendingAuth {
                    port: Arc::clone(&self.port),
                    request,
                    timeout: self.timeout,
                    attempt: self.attempt,
                })
            }
            _ => None,
        }
    }

    /// Apply the result of a call started by `submit`.
    ///
    /// Results of attempts abandoned by `reset` or superseded by a later
    /// submit are dropped.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        result: Result<(), AuthError>,
    ) -> Option<SubmissionOutcome> {
        if attempt != self.attempt {
            tracing::debug!(attempt, current = self.attempt, "dropping result of stale attempt");
            return None;
        }
        match self.dispatch(Action::Completed(result)) {
            Some(Effect::Succeeded) => {
                tracing::info!(kind = ?self.kind(), "authentication succeeded");
                Some(SubmissionOutcome::Succeeded)
            }
            Some(Effect::Notify(message)) => Some(SubmissionOutcome::Failed(message)),
            _ => None,
        }
    }
}
