//! Form field value objects

/// Named inputs used by the login and signup forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Stable key for the field
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full name",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm password",
        }
    }

    /// Secret fields are masked unless revealed
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }
}

/// A single form input with its current value and inline error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
    pub error: Option<String>,
    /// SHOW/HIDE toggle for secret fields
    pub revealed: bool,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
            error: None,
            revealed: false,
        }
    }

    /// Overwrite the value. Any stale error is dropped.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.error = None;
    }

    /// Clear value, error and reveal toggle
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
        self.revealed = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.name.is_secret() && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
