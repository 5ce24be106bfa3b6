//! Form state for the login and signup screens

use super::field::{FieldName, FormField};
use super::validators::validate_field;

/// Focus navigation shared by forms
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Which credential form a state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    /// Fields validated for this form, in display order
    pub fn schema(&self) -> &'static [FieldName] {
        match self {
            FormKind::Login => &[FieldName::Email, FieldName::Password],
            FormKind::Signup => &[
                FieldName::FullName,
                FieldName::Email,
                FieldName::Password,
                FieldName::ConfirmPassword,
            ],
        }
    }

    /// Message shown when the backend fails without one of its own
    pub fn default_failure_message(&self) -> &'static str {
        match self {
            FormKind::Login => "Invalid credentials",
            FormKind::Signup => "Sign up failed. Try again.",
        }
    }

    /// Message shown after a successful attempt, if any
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            FormKind::Login => None,
            FormKind::Signup => Some("Account created! Please sign in."),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Welcome to FlicksNow",
            FormKind::Signup => "Create your FlicksNow account",
        }
    }

    /// Label on the submit control when idle
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Login => "Sign in",
            FormKind::Signup => "Create account",
        }
    }
}

/// Field values and inline errors for one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: kind.schema().iter().copied().map(FormField::new).collect(),
            active_field_index: 0,
        }
    }

    pub fn login() -> Self {
        Self::new(FormKind::Login)
    }

    pub fn signup() -> Self {
        Self::new(FormKind::Signup)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: FieldName) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value, or "" for a field outside the schema
    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    /// Overwrite a field's value and drop its error without re-validating
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        let kind = self.kind;
        match self.field_mut(name) {
            Some(field) => field.set_value(value.into()),
            None => tracing::debug!(field = name.key(), ?kind, "ignoring field outside schema"),
        }
    }

    /// Run every validator in the schema. Returns true iff no field has an error.
    pub fn validate(&mut self) -> bool {
        let results: Vec<Option<String>> = self
            .fields
            .iter()
            .map(|f| validate_field(f.name, self).err().map(|e| e.to_string()))
            .collect();
        for (field, error) in self.fields.iter_mut().zip(results) {
            field.error = error;
        }
        let valid = self.is_valid();
        tracing::debug!(kind = ?self.kind, valid, "form validated");
        valid
    }

    /// True iff no field currently carries an error
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error.is_none())
    }

    /// Clear all values and errors
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    pub fn active(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Whether focus is on the last input ("done" submits from here)
    pub fn is_last_field(&self) -> bool {
        self.active_field_index + 1 == self.fields.len()
    }

    /// Flip SHOW/HIDE on the focused field if it is secret
    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            if field.name.is_secret() {
                field.revealed = !field.revealed;
            }
        }
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn errors(form: &FormState) -> Vec<Option<String>> {
        form.fields().iter().map(|f| f.error.clone()).collect()
    }

    mod schema {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_login_schema() {
            let form = FormState::login();
            let names: Vec<FieldName> = form.fields().iter().map(|f| f.name).collect();
            assert_eq!(names, vec![FieldName::Email, FieldName::Password]);
        }

        #[test]
        fn test_signup_schema() {
            let form = FormState::signup();
            let names: Vec<FieldName> = form.fields().iter().map(|f| f.name).collect();
            assert_eq!(
                names,
                vec![
                    FieldName::FullName,
                    FieldName::Email,
                    FieldName::Password,
                    FieldName::ConfirmPassword
                ]
            );
        }

        #[test]
        fn test_new_form_is_empty_and_valid() {
            let form = FormState::signup();
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
            assert!(form.is_valid());
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_default_messages() {
            assert_eq!(FormKind::Login.default_failure_message(), "Invalid credentials");
            assert_eq!(
                FormKind::Signup.default_failure_message(),
                "Sign up failed. Try again."
            );
            assert_eq!(FormKind::Login.success_message(), None);
            assert_eq!(
                FormKind::Signup.success_message(),
                Some("Account created! Please sign in.")
            );
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_login_invalid_email_valid_password() {
            let mut form = FormState::login();
            form.set_field(FieldName::Email, "not-an-email");
            form.set_field(FieldName::Password, "abc123");
            assert!(!form.validate());
            assert_eq!(form.error(FieldName::Email), Some("Enter a valid email"));
            assert_eq!(form.error(FieldName::Password), None);
        }

        #[test]
        fn test_signup_reports_every_failing_field() {
            let mut form = FormState::signup();
            form.set_field(FieldName::FullName, "");
            form.set_field(FieldName::Email, "a@b.com");
            form.set_field(FieldName::Password, "secret1");
            form.set_field(FieldName::ConfirmPassword, "secret2");
            assert!(!form.validate());
            assert_eq!(form.error(FieldName::FullName), Some("Name is required"));
            assert_eq!(form.error(FieldName::Email), None);
            assert_eq!(form.error(FieldName::Password), None);
            assert_eq!(
                form.error(FieldName::ConfirmPassword),
                Some("Passwords do not match")
            );
        }

        #[test]
        fn test_empty_login_reports_required() {
            let mut form = FormState::login();
            assert!(!form.validate());
            assert_eq!(form.error(FieldName::Email), Some("Email is required"));
            assert_eq!(form.error(FieldName::Password), Some("Password is required"));
        }

        #[test]
        fn test_valid_form_passes_and_clears_errors() {
            let mut form = FormState::login();
            assert!(!form.validate());
            form.set_field(FieldName::Email, "user@example.com");
            form.set_field(FieldName::Password, "secret1");
            assert!(form.validate());
            assert!(form.is_valid());
            assert_eq!(errors(&form), vec![None, None]);
        }

        #[test]
        fn test_validate_is_idempotent() {
            let mut form = FormState::signup();
            form.set_field(FieldName::Email, "bad");
            form.set_field(FieldName::Password, "abc");
            let first = form.validate();
            let first_errors = errors(&form);
            let second = form.validate();
            assert_eq!(first, second);
            assert_eq!(first_errors, errors(&form));
        }

        #[test]
        fn test_confirm_tracks_current_password() {
            let mut form = FormState::signup();
            form.set_field(FieldName::FullName, "Ada");
            form.set_field(FieldName::Email, "ada@example.com");
            form.set_field(FieldName::Password, "secret1");
            form.set_field(FieldName::ConfirmPassword, "secret1");
            assert!(form.validate());
            form.set_field(FieldName::Password, "secret9");
            assert!(!form.validate());
            assert_eq!(
                form.error(FieldName::ConfirmPassword),
                Some("Passwords do not match")
            );
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_clears_error_regardless_of_value() {
            let mut form = FormState::login();
            form.set_field(FieldName::Email, "bad");
            assert!(!form.validate());
            assert!(form.error(FieldName::Email).is_some());

            // Still invalid, but the stale error goes away until the next validate
            form.set_field(FieldName::Email, "still bad");
            assert_eq!(form.error(FieldName::Email), None);
            assert_eq!(form.error(FieldName::Password), Some("Password is required"));
        }

        #[test]
        fn test_set_field_outside_schema_is_ignored() {
            let mut form = FormState::login();
            form.set_field(FieldName::FullName, "Ada");
            assert_eq!(form.value(FieldName::FullName), "");
            assert!(form.field(FieldName::FullName).is_none());
        }

        #[test]
        fn test_set_field_keeps_other_errors() {
            let mut form = FormState::login();
            form.validate();
            form.set_field(FieldName::Password, "x");
            assert_eq!(form.error(FieldName::Password), None);
            assert_eq!(form.error(FieldName::Email), Some("Email is required"));
        }

        #[test]
        fn test_reset_clears_values_and_errors() {
            let mut form = FormState::signup();
            form.set_field(FieldName::Email, "bad");
            form.validate();
            form.next_field();
            form.reset();
            assert_eq!(form, FormState::signup());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles() {
            let mut form = FormState::login();
            form.next_field();
            assert_eq!(form.active_field_index, 1);
            assert!(form.is_last_field());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = FormState::signup();
            form.prev_field();
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = FormState::signup();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_toggle_reveal_only_on_secret_fields() {
            let mut form = FormState::login();
            form.toggle_reveal();
            assert!(!form.field(FieldName::Email).unwrap().revealed);
            form.next_field();
            form.toggle_reveal();
            assert!(form.field(FieldName::Password).unwrap().revealed);
            form.toggle_reveal();
            assert!(!form.field(FieldName::Password).unwrap().revealed);
        }
    }
}
