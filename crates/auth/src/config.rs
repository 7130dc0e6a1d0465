use std::time::Duration;

use url::Url;

use crate::error::AuthError;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Configuration for the OAuth2 identity provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: Url,
    pub auth_url: Url,
    pub token_url: Url,
    pub userinfo_url: Url,
    pub scopes: Vec<String>,
}

impl ProviderConfig {
    /// Google endpoints with the profile and email scopes.
    pub fn google(
        client_id: String,
        client_secret: String,
        redirect_uri: Url,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            auth_url: parse_url("auth URL", GOOGLE_AUTH_URL)?,
            token_url: parse_url("token URL", GOOGLE_TOKEN_URL)?,
            userinfo_url: parse_url("userinfo URL", GOOGLE_USERINFO_URL)?,
            scopes: vec![
                "https://www.googleapis.com/auth/userinfo.profile".to_string(),
                "https://www.googleapis.com/auth/userinfo.email".to_string(),
            ],
        })
    }
}

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub provider: ProviderConfig,
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Where every step redirects once it is done.
    pub home_path: String,
}

impl AuthConfig {
    /// Default settings around the given provider.
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            provider,
            session_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            cookie_name: "session".to_string(),
            cookie_secure: false,
            home_path: "/".to_string(),
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CLIENT_ID`: OAuth client ID (required)
    /// - `CLIENT_SECRET`: OAuth client secret (required)
    /// - `REDIRECT_URL`: Callback URL registered with the provider (required)
    /// - `SESSION_TTL_DAYS`: Session cookie lifetime in days (default: 7)
    /// - `COOKIE_SECURE`: Whether to set the secure flag on cookies (default: false)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if a required variable is missing or the
    /// redirect URL does not parse.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AuthError::Config(format!("{key} must be set")))
        };

        let redirect_uri = parse_url("REDIRECT_URL", &required("REDIRECT_URL")?)?;
        let provider =
            ProviderConfig::google(required("CLIENT_ID")?, required("CLIENT_SECRET")?, redirect_uri)?;

        let mut config = Self::new(provider);

        if let Some(days) = lookup("SESSION_TTL_DAYS").and_then(|s| s.parse::<u64>().ok()) {
            config.session_ttl = Duration::from_secs(days * 24 * 60 * 60);
        }

        config.cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(config)
    }
}

fn parse_url(what: &str, value: &str) -> Result<Url, AuthError> {
    Url::parse(value).map_err(|e| AuthError::Config(format!("invalid {what} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("CLIENT_ID", "client-123"),
        ("CLIENT_SECRET", "shh"),
        ("REDIRECT_URL", "http://localhost:4949/oauth/google/callback"),
    ];

    #[test]
    fn test_default_values() {
        let config = AuthConfig::from_lookup(lookup_from(REQUIRED)).unwrap();

        assert_eq!(config.provider.client_id, "client-123");
        assert_eq!(config.provider.client_secret, "shh");
        assert_eq!(
            config.provider.redirect_uri.as_str(),
            "http://localhost:4949/oauth/google/callback"
        );
        assert_eq!(config.provider.scopes.len(), 2);
        assert_eq!(config.session_ttl, Duration::from_secs(7 * 24 * 60 * 60));
        assert_eq!(config.cookie_name, "session");
        assert!(!config.cookie_secure);
        assert_eq!(config.home_path, "/");
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SESSION_TTL_DAYS", "1"));
        pairs.push(("COOKIE_SECURE", "true"));

        let config = AuthConfig::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.session_ttl, Duration::from_secs(24 * 60 * 60));
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_missing_client_id() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "CLIENT_ID")
            .collect();

        let err = AuthConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, AuthError::Config(msg) if msg.contains("CLIENT_ID")));
    }

    #[test]
    fn test_invalid_redirect_url() {
        let mut pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "REDIRECT_URL")
            .collect();
        pairs.push(("REDIRECT_URL", "not a url"));

        let err = AuthConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }
}
