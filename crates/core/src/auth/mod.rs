mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{decode_claims, ensure_verified, generate_session_id, parse_auth_path};
pub use traits::{IdentityProvider, Result, SessionRepository};
pub use types::{AccessToken, AuthStep, Session, SessionId, UserClaims};
