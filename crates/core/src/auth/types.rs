use serde::{Deserialize, Serialize};

/// Cryptographically random session identifier.
///
/// The same value is used as the session map key and as the cookie value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity attributes returned by the provider's userinfo endpoint.
///
/// Fields missing from the provider response decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserClaims {
    /// Provider's unique user identifier.
    pub id: String,
    pub email: String,
    /// Whether the provider has verified `email`.
    pub verified_email: bool,
    /// Display name.
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    /// Profile link.
    pub link: String,
    /// Avatar URL.
    pub picture: String,
    pub locale: String,
}

/// A browser session.
///
/// `Session::default()` is the anonymous session returned on a lookup miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Only true for sessions created by a successful provider callback.
    pub authenticated: bool,
    pub claims: UserClaims,
}

impl Session {
    /// Builds an authenticated session for freshly verified claims.
    pub fn authenticated(id: SessionId, claims: UserClaims) -> Self {
        Self {
            id,
            authenticated: true,
            claims,
        }
    }
}

/// Bearer token obtained from the provider's token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}

/// Step of the sign-in flow, taken from the last segment of
/// `/oauth/<provider>/<step>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Login,
    Callback,
    Logout,
}

impl std::str::FromStr for AuthStep {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "callback" => Ok(Self::Callback),
            "logout" => Ok(Self::Logout),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AuthStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Callback => write!(f, "callback"),
            Self::Logout => write!(f, "logout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.authenticated);
        assert!(session.id.is_empty());
        assert_eq!(session.claims, UserClaims::default());
    }

    #[test]
    fn access_token_debug_hides_secret() {
        let token = AccessToken::new("ya29.secret".to_string());
        assert!(!format!("{token:?}").contains("ya29"));
        assert_eq!(token.secret(), "ya29.secret");
    }

    #[test]
    fn auth_step_parses_known_names_only() {
        assert_eq!("login".parse::<AuthStep>(), Ok(AuthStep::Login));
        assert_eq!("callback".parse::<AuthStep>(), Ok(AuthStep::Callback));
        assert_eq!("logout".parse::<AuthStep>(), Ok(AuthStep::Logout));
        assert!("Login".parse::<AuthStep>().is_err());
        assert!("frobnicate".parse::<AuthStep>().is_err());
    }
}
