//! Trait abstraction for the authentication backend to enable mocking in tests

use super::AuthError;
use async_trait::async_trait;

/// Backend that decides whether a login or signup succeeds
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Sign in with an email address and password
    async fn login(&self, email: String, password: String) -> Result<(), AuthError>;

    /// Create an account
    async fn signup(&self, name: String, email: String, password: String)
        -> Result<(), AuthError>;
}

/// Credentials captured from a form that passed validation.
///
/// Email and name are trimmed; the password is passed through untouched.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
    },
}

impl AuthRequest {
    /// Issue this request against a port
    pub async fn dispatch(self, port: &dyn AuthPort) -> Result<(), AuthError> {
        match self {
            AuthRequest::Login { email, password } => port.login(email, password).await,
            AuthRequest::Signup {
                name,
                email,
                password,
            } => port.signup(name, email, password).await,
        }
    }
}

// Keeps credentials and personal details out of logs and panic messages
impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRequest::Login { .. } => f
                .debug_struct("Login")
                .field("email", &"***")
                .field("password", &"***")
                .finish(),
            AuthRequest::Signup { .. } => f
                .debug_struct("Signup")
                .field("name", &"***")
                .field("email", &"***")
                .field("password", &"***")
                .finish(),
        }
    }
}
