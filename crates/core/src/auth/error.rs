use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid auth route: {method} {path}")]
    InvalidRoute { method: String, path: String },

    #[error("unknown auth step: {0}")]
    UnknownStep(String),

    #[error("failed to exchange authorization code: {0}")]
    CodeExchange(String),

    #[error("failed to fetch user info: {0}")]
    UserInfo(String),

    #[error("failed to decode claims: {0}")]
    ClaimsDecode(String),

    #[error("email was not verified by the provider")]
    EmailNotVerified,

    #[error("provider error: {0}")]
    Provider(String),
}
