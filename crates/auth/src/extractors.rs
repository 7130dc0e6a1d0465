//! Axum extractors for authentication.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use porter_core::auth::{Session, SessionId};

use crate::AuthState;

/// Extractor for the browser's session.
///
/// Never rejects: a missing cookie or an unknown id yields the anonymous
/// `Session::default()`.
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let session_id = match jar.get(&auth_state.config.cookie_name) {
            Some(cookie) => SessionId::new(cookie.value().to_string()),
            None => {
                tracing::debug!("no session cookie");
                SessionId::default()
            }
        };

        let session = auth_state.sessions.get(&session_id).await;
        tracing::debug!(
            session_id = %session_id,
            authenticated = session.authenticated,
            "resolved session"
        );

        Ok(CurrentSession(session))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use porter_core::auth::{SessionRepository, UserClaims};
    use url::Url;

    use super::*;
    use crate::{AuthConfig, InMemorySessionStore, MockProvider, ProviderConfig};

    fn test_state(store: &InMemorySessionStore) -> AuthState {
        let config = AuthConfig::new(
            ProviderConfig::google(
                "client".to_string(),
                "secret".to_string(),
                Url::parse("http://localhost:4949/oauth/mock/callback").unwrap(),
            )
            .unwrap(),
        );
        let provider = MockProvider::new(
            Url::parse("http://idp.test/authorize").unwrap(),
            config.provider.redirect_uri.clone(),
        );
        AuthState::new(Arc::new(store.clone()), Arc::new(provider), config)
    }

    async fn extract(state: &AuthState, cookie: Option<&str>) -> Session {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();

        match CurrentSession::from_request_parts(&mut parts, state).await {
            Ok(CurrentSession(session)) => session,
            Err(never) => match never {},
        }
    }

    #[tokio::test]
    async fn test_no_cookie_is_anonymous() {
        let store = InMemorySessionStore::new();
        let state = test_state(&store);

        let session = extract(&state, None).await;

        assert_eq!(session, Session::default());
    }

    #[tokio::test]
    async fn test_unknown_cookie_is_anonymous() {
        let store = InMemorySessionStore::new();
        let state = test_state(&store);

        let session = extract(&state, Some("session=stale")).await;

        assert!(!session.authenticated);
    }

    #[tokio::test]
    async fn test_known_cookie_resolves_session() {
        let store = InMemorySessionStore::new();
        let state = test_state(&store);
        let created = store
            .set(UserClaims {
                email: "ada@example.com".to_string(),
                verified_email: true,
                ..Default::default()
            })
            .await;

        let cookie = format!("theme=dark; session={}", created.id);
        let session = extract(&state, Some(&cookie)).await;

        assert!(session.authenticated);
        assert_eq!(session.claims.email, "ada@example.com");
    }
}
