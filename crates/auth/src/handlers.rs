//! HTTP handlers for auth routes.

use axum::{
    extract::{FromRef, State},
    http::{Method, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::any,
    Router,
};
use axum_extra::extract::CookieJar;
use porter_core::auth::{decode_claims, ensure_verified, parse_auth_path, AuthStep, SessionId};
use time::OffsetDateTime;
use tracing::Instrument;

use crate::cookies::{removal_cookie, session_cookie};
use crate::error::AuthError;
use crate::AuthState;

/// `state` parameter sent with every login redirect.
///
/// It is a fixed value and the callback does not check it, so the flow has no
/// CSRF binding between login and callback.
const LOGIN_STATE: &str = "state";

/// Creates the auth router.
///
/// Every method on `/oauth/{*path}` reaches the same handler, which accepts:
/// - `GET /oauth/<provider>/login` - Redirect to the provider
/// - `GET /oauth/<provider>/callback?code=...` - Exchange the code and sign in
/// - `GET /oauth/<provider>/logout` - Sign out
///
/// Anything else under `/oauth/` is answered with 404.
pub fn auth_routes<S>() -> Router<S>
where
    AuthState: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/oauth/{*path}", any(oauth))
}

async fn oauth(
    State(state): State<AuthState>,
    method: Method,
    uri: Uri,
    jar: CookieJar,
) -> Response {
    let (provider, step) = match parse_auth_path(method.as_str(), uri.path()) {
        Ok(route) => route,
        Err(e) => return AuthError::from(e).into_response(),
    };

    let span = tracing::info_span!("oauth", %provider, %step);
    let code = uri.query().and_then(authorization_code);

    // Errors are rendered inside the span so their logs carry the step.
    async move {
        tracing::debug!("oauth step");
        let result = match step {
            AuthStep::Login => login(&state).await,
            AuthStep::Callback => callback(&state, code, jar).await,
            AuthStep::Logout => Ok(logout(&state, jar).await),
        };
        result.unwrap_or_else(IntoResponse::into_response)
    }
    .instrument(span)
    .await
}

/// First `code` value in a query string. Repeated keys are not an error.
fn authorization_code(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
}

async fn login(state: &AuthState) -> Result<Response, AuthError> {
    let auth_url = state.provider.authorization_url(LOGIN_STATE).await?;
    Ok(Redirect::temporary(auth_url.as_str()).into_response())
}

async fn callback(
    state: &AuthState,
    code: Option<String>,
    jar: CookieJar,
) -> Result<Response, AuthError> {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        tracing::warn!("callback: no authorization code in request");
        return Ok(redirect_home(state));
    };

    // A failed exchange sends the user home to start over.
    let token = match state.provider.exchange_code(&code).await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "callback: code exchange failed");
            return Ok(redirect_home(state));
        }
    };

    let body = state.provider.fetch_user_info(&token).await?;
    let claims = decode_claims(&body)?;
    ensure_verified(&claims)?;
    tracing::debug!("callback: claims loaded from provider");

    let session = state.sessions.set(claims).await;
    tracing::info!(
        session_id = %session.id,
        name = %session.claims.name,
        email = %session.claims.email,
        "callback: created session"
    );

    let jar = jar.add(session_cookie(
        &state.config,
        &session.id,
        OffsetDateTime::now_utc(),
    ));

    Ok((jar, Redirect::temporary(&state.config.home_path)).into_response())
}

async fn logout(state: &AuthState, jar: CookieJar) -> Response {
    let Some(cookie) = jar.get(&state.config.cookie_name) else {
        tracing::debug!("logout: no session cookie");
        return redirect_home(state);
    };
    let session_id = SessionId::new(cookie.value().to_string());

    let jar = jar.add(removal_cookie(&state.config, OffsetDateTime::now_utc()));

    tracing::info!(session_id = %session_id, "logout: expired cookie, deleting session");
    state.sessions.delete(&session_id).await;

    (jar, Redirect::temporary(&state.config.home_path)).into_response()
}

fn redirect_home(state: &AuthState) -> Response {
    Redirect::temporary(&state.config.home_path).into_response()
}
