//! Demo backend: waits a fixed delay, then accepts every attempt

use super::{AuthError, AuthPort};
use async_trait::async_trait;
use std::time::Duration;

/// Stand-in for a real authentication service
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    login_delay: Duration,
    signup_delay: Duration,
}

impl SimulatedAuth {
    /// Default sign-in delay (1 second)
    pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);
    /// Default sign-up delay (1.2 seconds)
    pub const DEFAULT_SIGNUP_DELAY: Duration = Duration::from_millis(1200);

    pub fn new(login_delay: Duration, signup_delay: Duration) -> Self {
        Self {
            login_delay,
            signup_delay,
        }
    }
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOGIN_DELAY, Self::DEFAULT_SIGNUP_DELAY)
    }
}

#[async_trait]
impl AuthPort for SimulatedAuth {
    async fn login(&self, _email: String, _password: String) -> Result<(), AuthError> {
        tracing::debug!(delay_ms = self.login_delay.as_millis() as u64, "simulated login");
        tokio::time::sleep(self.login_delay).await;
        Ok(())
    }

    async fn signup(
        &self,
        _name: String,
        _email: String,
        _password: String,
    ) -> Result<(), AuthError> {
        tracing::debug!(delay_ms = self.signup_delay.as_millis() as u64, "simulated signup");
        tokio::time::sleep(self.signup_delay).await;
        Ok(())
    }
}
