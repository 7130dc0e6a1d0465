use rand::{distr::Alphanumeric, Rng};

use super::{AuthError, AuthStep, Result, SessionId, UserClaims};

/// Generate a cryptographically random session ID.
pub fn generate_session_id() -> SessionId {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    SessionId::new(id)
}

/// Parse an auth route of the form `/oauth/<provider>/<step>`.
///
/// Returns the provider segment and the step. Anything other than a `GET`
/// with exactly four `/`-separated segments is an invalid route.
pub fn parse_auth_path<'a>(method: &str, path: &'a str) -> Result<(&'a str, AuthStep)> {
    let parts: Vec<&str> = path.split('/').collect();
    if method != "GET" || parts.len() != 4 {
        return Err(AuthError::InvalidRoute {
            method: method.to_string(),
            path: path.to_string(),
        });
    }

    let step = parts[3]
        .parse::<AuthStep>()
        .map_err(|_| AuthError::UnknownStep(parts[3].to_string()))?;

    Ok((parts[2], step))
}

/// Decode a userinfo JSON document into claims.
pub fn decode_claims(body: &str) -> Result<UserClaims> {
    serde_json::from_str(body).map_err(|e| AuthError::ClaimsDecode(e.to_string()))
}

/// Reject claims whose email the provider has not verified.
pub fn ensure_verified(claims: &UserClaims) -> Result<()> {
    if claims.verified_email {
        Ok(())
    } else {
        Err(AuthError::EmailNotVerified)
    }
}
