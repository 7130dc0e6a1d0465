//! Mock identity provider for development and testing.
//!
//! The authorization code is the base64 encoding of the userinfo JSON
//! document the provider should hand back, so tests can drive every callback
//! branch without a network.

use async_trait::async_trait;
use base64::Engine;
use porter_core::auth::{AccessToken, AuthError, IdentityProvider, Result};
use url::Url;

/// Mock identity provider.
pub struct MockProvider {
    authorize_url: Url,
    redirect_uri: Url,
}

impl MockProvider {
    /// Create a new MockProvider.
    ///
    /// # Arguments
    /// * `authorize_url` - Where login redirects the browser
    /// * `redirect_uri` - The callback URL for the app
    pub fn new(authorize_url: Url, redirect_uri: Url) -> Self {
        Self {
            authorize_url,
            redirect_uri,
        }
    }

    /// Encode a userinfo document as an authorization code this provider accepts.
    pub fn encode_code(userinfo: &serde_json::Value) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(userinfo.to_string())
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    async fn authorization_url(&self, state: &str) -> Result<Url> {
        let mut url = self.authorize_url.clone();

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("state", state)
            .append_pair("redirect_uri", self.redirect_uri.as_str());

        Ok(url)
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(code)
            .map_err(|e| AuthError::CodeExchange(e.to_string()))?;

        let document =
            String::from_utf8(decoded).map_err(|e| AuthError::CodeExchange(e.to_string()))?;

        // The token carries the userinfo document back to `fetch_user_info`.
        Ok(AccessToken::new(document))
    }

    async fn fetch_user_info(&self, token: &AccessToken) -> Result<String> {
        Ok(token.secret().to_string())
    }
}
