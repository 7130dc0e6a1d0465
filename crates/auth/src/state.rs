//! Application state for auth.

use std::sync::Arc;

use porter_core::auth::{IdentityProvider, SessionRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::providers::GoogleProvider;

/// Shared state for auth handlers.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionRepository>,
    pub provider: Arc<dyn IdentityProvider>,
    pub config: AuthConfig,
}

impl AuthState {
    /// Creates a new AuthState from an explicit store and provider.
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        provider: Arc<dyn IdentityProvider>,
        config: AuthConfig,
    ) -> Self {
        Self {
            sessions,
            provider,
            config,
        }
    }

    /// Creates an AuthState backed by the Google provider.
    ///
    /// # Errors
    ///
    /// Returns an error if provider initialization fails.
    pub fn with_google(
        sessions: Arc<dyn SessionRepository>,
        config: AuthConfig,
    ) -> Result<Self, AuthError> {
        let provider = GoogleProvider::new(&config.provider)?;
        Ok(Self::new(sessions, Arc::new(provider), config))
    }
}
