//! Session cookie builders.

use axum_extra::extract::cookie::{Cookie, SameSite};
use porter_core::auth::SessionId;
use time::OffsetDateTime;

use crate::config::AuthConfig;

/// Cookie carrying `id`, expiring `session_ttl` after `now`.
pub(crate) fn session_cookie(
    config: &AuthConfig,
    id: &SessionId,
    now: OffsetDateTime,
) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), id.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .expires(now + config.session_ttl)
        .build()
}

/// Empty, already-expired cookie that makes the browser drop the session.
pub(crate) fn removal_cookie(config: &AuthConfig, now: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .expires(now - config.session_ttl)
        .max_age(time::Duration::ZERO)
        .build()
}
