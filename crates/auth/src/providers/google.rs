//! Google OAuth2 provider implementation.

use async_trait::async_trait;
use oauth2::{
    basic::BasicClient, reqwest::async_http_client, AuthUrl, AuthorizationCode, ClientId,
    ClientSecret, CsrfToken, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use porter_core::auth::{AccessToken, AuthError, IdentityProvider, Result};
use url::Url;

use crate::config::ProviderConfig;

/// Google OAuth2 provider.
///
/// Uses the authorization code flow against the configured endpoints and the
/// v2 userinfo API for claims.
pub struct GoogleProvider {
    client: BasicClient,
    http_client: reqwest::Client,
    userinfo_url: Url,
    scopes: Vec<String>,
}

impl GoogleProvider {
    /// Create a new Google provider from static endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(config.client_secret.clone())),
            AuthUrl::from_url(config.auth_url.clone()),
            Some(TokenUrl::from_url(config.token_url.clone())),
        )
        .set_redirect_uri(RedirectUrl::from_url(config.redirect_uri.clone()));

        // Build HTTP client without redirect following
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::Provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            http_client,
            userinfo_url: config.userinfo_url.clone(),
            scopes: config.scopes.clone(),
        })
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    async fn authorization_url(&self, state: &str) -> Result<Url> {
        let state_owned = state.to_string();

        let (auth_url, _csrf_token) = self
            .client
            .authorize_url(move || CsrfToken::new(state_owned))
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .url();

        Ok(auth_url)
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let token_response = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(async_http_client)
            .await
            .map_err(|e| AuthError::CodeExchange(e.to_string()))?;

        Ok(AccessToken::new(
            token_response.access_token().secret().to_string(),
        ))
    }

    async fn fetch_user_info(&self, token: &AccessToken) -> Result<String> {
        let response = self
            .http_client
            .get(self.userinfo_url.clone())
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| AuthError::UserInfo(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::UserInfo(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| AuthError::UserInfo(e.to_string()))
    }
}
