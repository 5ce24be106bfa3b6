//! Submission state machine for credential forms.
//!
//! [`AuthFlow::reduce`] is a pure transition: it consumes the current
//! (form, submission) snapshot and returns the next snapshot plus at most one
//! effect for the caller to carry out. Nothing here performs I/O.

use super::{FieldName, FormKind, FormState};
use crate::auth::{AuthError, AuthRequest};

/// Lifecycle of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    /// Whether a new submit is accepted from this state
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    /// An authentication call is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// User or system input to the flow
#[derive(Debug)]
pub enum Action {
    SetField(FieldName, String),
    Submit,
    Validate,
    Completed(Result<(), AuthError>),
    Reset,
}

/// Work the caller must do after a transition
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Submit was accepted; dispatch [`Action::Validate`] in the same tick
    RunValidation,
    /// Validation passed; issue this request to the authentication port
    Authenticate(AuthRequest),
    /// The attempt succeeded
    Succeeded,
    /// The attempt failed; show this message transiently
    Notify(String),
}

/// Snapshot of a credential form and its submission state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFlow {
    pub form: FormState,
    pub submission: SubmissionState,
}

impl AuthFlow {
    pub fn new(kind: FormKind) -> Self {
        Self {
            form: FormState::new(kind),
            submission: SubmissionState::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind()
    }

    /// Apply one action, producing the next snapshot
    pub fn reduce(mut self, action: Action) -> (Self, Option<Effect>) {
        let before = self.submission.clone();
        let effect = match action {
            Action::SetField(name, value) => {
                self.form.set_field(name, value);
                None
            }
            Action::Submit => {
                if self.submission.accepts_submit() {
                    self.submission = SubmissionState::Validating;
                    Some(Effect::RunValidation)
                } else {
                    tracing::debug!(state = ?self.submission, "submit ignored");
                    None
                }
            }
            Action::Validate => {
                if self.submission != SubmissionState::Validating {
                    None
                } else if self.form.validate() {
                    self.submission = SubmissionState::Submitting;
                    Some(Effect::Authenticate(self.request()))
                } else {
                    self.submission = SubmissionState::Idle;
                    None
                }
            }
            Action::Completed(result) => {
                if !self.submission.is_busy() {
                    tracing::debug!(state = ?self.submission, "stale completion ignored");
                    None
                } else {
                    match result {
                        Ok(()) => {
                            self.submission = SubmissionState::Succeeded;
                            Some(Effect::Succeeded)
                        }
                        Err(err) => {
                            let message =
                                err.user_message(self.kind().default_failure_message());
                            tracing::warn!(kind = ?self.kind(), error = %err, "authentication failed");
                            self.submission = SubmissionState::Failed(message.clone());
                            Some(Effect::Notify(message))
                        }
                    }
                }
            }
            Action::Reset => {
                self.form.reset();
                self.submission = SubmissionState::Idle;
                None
            }
        };
        if before != self.submission {
            tracing::debug!(kind = ?self.kind(), from = ?before, to = ?self.submission, "submission transition");
        }
        (self, effect)
    }

    fn request(&self) -> AuthRequest {
        let email = self.form.value(FieldName::Email).trim().to_string();
        let password = self.form.value(FieldName::Password).to_string();
        match self.kind() {
            FormKind::Login => AuthRequest::Login { email, password },
            FormKind::Signup => AuthRequest::Signup {
                name: self.form.value(FieldName::FullName).trim().to_string(),
                email,
                password,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_login() -> AuthFlow {
        let flow = AuthFlow::new(FormKind::Login);
        let (flow, _) = flow.reduce(Action::SetField(
            FieldName::Email,
            "  user@example.com ".to_string(),
        ));
        let (flow, _) = flow.reduce(Action::SetField(FieldName::Password, " secret1".to_string()));
        flow
    }

    fn submitting_login() -> AuthFlow {
        let (flow, _) = filled_login().reduce(Action::Submit);
        let (flow, _) = flow.reduce(Action::Validate);
        assert_eq!(flow.submission, SubmissionState::Submitting);
        flow
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_successful_login_walks_every_state() {
            let flow = filled_login();
            assert_eq!(flow.submission, SubmissionState::Idle);

            let (flow, effect) = flow.reduce(Action::Submit);
            assert_eq!(flow.submission, SubmissionState::Validating);
            assert_eq!(effect, Some(Effect::RunValidation));

            let (flow, effect) = flow.reduce(Action::Validate);
            assert_eq!(flow.submission, SubmissionState::Submitting);
            assert_eq!(
                effect,
                Some(Effect::Authenticate(AuthRequest::Login {
                    email: "user@example.com".to_string(),
                    password: " secret1".to_string(),
                }))
            );

            let (flow, effect) = flow.reduce(Action::Completed(Ok(())));
            assert_eq!(flow.submission, SubmissionState::Succeeded);
            assert_eq!(effect, Some(Effect::Succeeded));
        }

        #[test]
        fn test_invalid_form_returns_to_idle_without_request() {
            let flow = AuthFlow::new(FormKind::Login);
            let (flow, _) =
                flow.reduce(Action::SetField(FieldName::Email, "not-an-email".to_string()));
            let (flow, _) = flow.reduce(Action::SetField(FieldName::Password, "abc123".to_string()));
            let (flow, _) = flow.reduce(Action::Submit);
            let (flow, effect) = flow.reduce(Action::Validate);
            assert_eq!(flow.submission, SubmissionState::Idle);
            assert_eq!(effect, None);
            assert_eq!(flow.form.error(FieldName::Email), Some("Enter a valid email"));
            assert_eq!(flow.form.error(FieldName::Password), None);
        }

        #[test]
        fn test_signup_request_trims_name_and_email() {
            let mut flow = AuthFlow::new(FormKind::Signup);
            for (name, value) in [
                (FieldName::FullName, " Ada Lovelace "),
                (FieldName::Email, " ada@example.com"),
                (FieldName::Password, "secret1"),
                (FieldName::ConfirmPassword, "secret1"),
            ] {
                flow = flow.reduce(Action::SetField(name, value.to_string())).0;
            }
            let (flow, _) = flow.reduce(Action::Submit);
            let (_, effect) = flow.reduce(Action::Validate);
            assert_eq!(
                effect,
                Some(Effect::Authenticate(AuthRequest::Signup {
                    name: "Ada Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                    password: "secret1".to_string(),
                }))
            );
        }

        #[test]
        fn test_failure_uses_default_message() {
            let (flow, effect) =
                submitting_login().reduce(Action::Completed(Err(AuthError::InvalidCredentials)));
            assert_eq!(
                flow.submission,
                SubmissionState::Failed("Invalid credentials".to_string())
            );
            assert_eq!(effect, Some(Effect::Notify("Invalid credentials".to_string())));
        }

        #[test]
        fn test_failure_prefers_backend_message() {
            let (flow, effect) = submitting_login().reduce(Action::Completed(Err(
                AuthError::Rejected("Account locked".to_string()),
            )));
            assert_eq!(
                flow.submission,
                SubmissionState::Failed("Account locked".to_string())
            );
            assert_eq!(effect, Some(Effect::Notify("Account locked".to_string())));
        }

        #[test]
        fn test_failed_accepts_new_submit() {
            let (flow, _) =
                submitting_login().reduce(Action::Completed(Err(AuthError::InvalidCredentials)));
            let (flow, effect) = flow.reduce(Action::Submit);
            assert_eq!(flow.submission, SubmissionState::Validating);
            assert_eq!(effect, Some(Effect::RunValidation));
        }

        #[test]
        fn test_reset_from_any_state() {
            for flow in [filled_login(), submitting_login()] {
                let (flow, effect) = flow.reduce(Action::Reset);
                assert_eq!(effect, None);
                assert_eq!(flow, AuthFlow::new(FormKind::Login));
            }
        }
    }

    mod guards {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_ignored_while_submitting() {
            let (flow, effect) = submitting_login().reduce(Action::Submit);
            assert_eq!(flow.submission, SubmissionState::Submitting);
            assert_eq!(effect, None);
            let (flow, effect) = flow.reduce(Action::Validate);
            assert_eq!(flow.submission, SubmissionState::Submitting);
            assert_eq!(effect, None);
        }

        #[test]
        fn test_submit_ignored_after_success() {
            let (flow, _) = submitting_login().reduce(Action::Completed(Ok(())));
            let (flow, effect) = flow.reduce(Action::Submit);
            assert_eq!(flow.submission, SubmissionState::Succeeded);
            assert_eq!(effect, None);
        }

        #[test]
        fn test_validate_outside_validating_is_noop() {
            let (flow, effect) = filled_login().reduce(Action::Validate);
            assert_eq!(flow.submission, SubmissionState::Idle);
            assert_eq!(effect, None);
            // Errors untouched because validation never ran
            assert!(flow.form.fields().iter().all(|f| f.error.is_none()));
        }

        #[test]
        fn test_completion_outside_submitting_is_ignored() {
            let (flow, effect) = filled_login().reduce(Action::Completed(Ok(())));
            assert_eq!(flow.submission, SubmissionState::Idle);
            assert_eq!(effect, None);

            let (flow, _) = submitting_login().reduce(Action::Completed(Ok(())));
            let (flow, effect) = flow.reduce(Action::Completed(Ok(())));
            assert_eq!(flow.submission, SubmissionState::Succeeded);
            assert_eq!(effect, None);
        }

        #[test]
        fn test_edits_allowed_while_submitting() {
            let (flow, effect) = submitting_login()
                .reduce(Action::SetField(FieldName::Email, "other@example.com".to_string()));
            assert_eq!(effect, None);
            assert_eq!(flow.submission, SubmissionState::Submitting);
            assert_eq!(flow.form.value(FieldName::Email), "other@example.com");
        }

        #[test]
        fn test_accepts_submit_states() {
            assert!(SubmissionState::Idle.accepts_submit());
            assert!(SubmissionState::Failed("x".to_string()).accepts_submit());
            assert!(!SubmissionState::Validating.accepts_submit());
            assert!(!SubmissionState::Submitting.accepts_submit());
            assert!(!SubmissionState::Succeeded.accepts_submit());
        }
    }
}
