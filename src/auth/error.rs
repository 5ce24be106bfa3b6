//! Authentication failures reported by an [`AuthPort`](super::AuthPort)

use std::time::Duration;
use thiserror::Error;

/// Whole-form failure of a login or signup attempt. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend refused the attempt and supplied its own message
    #[error("{0}")]
    Rejected(String),
    /// The backend refused the credentials without a message
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The call did not finish within the configured timeout
    #[error("authentication timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The backend could not be reached
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Message to surface to the user, falling back to the form's default
    pub fn user_message(&self, default: &str) -> String {
        match self {
            AuthError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => default.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_backend_message() {
        let err = AuthError::Rejected("Account locked".to_string());
        assert_eq!(err.user_message("Invalid credentials"), "Account locked");
    }

    #[test]
    fn test_blank_rejection_falls_back_to_default() {
        let err = AuthError::Rejected("  ".to_string());
        assert_eq!(err.user_message("Invalid credentials"), "Invalid credentials");
    }

    #[test]
    fn test_other_errors_use_default() {
        assert_eq!(
            AuthError::InvalidCredentials.user_message("Invalid credentials"),
            "Invalid credentials"
        );
        assert_eq!(
            AuthError::Timeout(Duration::from_secs(1)).user_message("Sign up failed. Try again."),
            "Sign up failed. Try again."
        );
        assert_eq!(
            AuthError::Unavailable("offline".to_string()).user_message("Invalid credentials"),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = AuthError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "authentication timed out after 1500ms");
    }
}
