use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Auth errors for the porter_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants
/// for I/O concerns that can't be in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (routing, claims, provider calls)
    #[error(transparent)]
    Core(#[from] porter_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// HTTP status the browser sees for this error.
    pub fn status_code(&self) -> StatusCode {
        use porter_core::auth::AuthError as CoreError;

        match self {
            AuthError::Core(core_err) => match core_err {
                CoreError::InvalidRoute { .. } | CoreError::UnknownStep(_) => {
                    StatusCode::NOT_FOUND
                }
                CoreError::EmailNotVerified => StatusCode::UNAUTHORIZED,
                CoreError::CodeExchange(_)
                | CoreError::UserInfo(_)
                | CoreError::ClaimsDecode(_)
                | CoreError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AuthError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Auth error");
        } else {
            tracing::warn!(error = %self, "Auth request rejected");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, reason).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use porter_core::auth::AuthError as CoreError;

    #[test]
    fn route_errors_are_not_found() {
        let err = AuthError::from(CoreError::UnknownStep("frobnicate".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = AuthError::from(CoreError::InvalidRoute {
            method: "POST".to_string(),
            path: "/oauth/google/login".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unverified_email_is_unauthorized() {
        let err = AuthError::from(CoreError::EmailNotVerified);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn provider_failures_are_internal_errors() {
        for err in [
            CoreError::UserInfo("timeout".to_string()),
            CoreError::ClaimsDecode("eof".to_string()),
            CoreError::Provider("bad url".to_string()),
        ] {
            assert_eq!(
                AuthError::from(err).status_code(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn into_response_uses_mapped_status() {
        let response = AuthError::from(CoreError::EmailNotVerified).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
