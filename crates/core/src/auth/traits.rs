use async_trait::async_trait;
use url::Url;

use super::{AccessToken, AuthError, Session, SessionId, UserClaims};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Abstraction over the external OAuth2 identity provider.
///
/// Every call is attempted once; callers never retry.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authorization URL the browser is redirected to on login.
    async fn authorization_url(&self, state: &str) -> Result<Url>;

    /// Exchange an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken>;

    /// Fetch the raw userinfo JSON document for `token`.
    async fn fetch_user_info(&self, token: &AccessToken) -> Result<String>;
}

/// Session storage abstraction.
///
/// None of the operations can fail: a miss yields the anonymous session and
/// deleting an absent id is a no-op.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Look up a session, returning `Session::default()` when absent.
    async fn get(&self, id: &SessionId) -> Session;

    /// Create an authenticated session under a freshly generated id.
    async fn set(&self, claims: UserClaims) -> Session;

    /// Remove a session if present.
    async fn delete(&self, id: &SessionId);
}
