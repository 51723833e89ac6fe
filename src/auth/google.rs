//! Google OAuth2 authorization-code flow for the admin sign-in.
//!
//! Sign-in is restricted to institutional accounts; the domain check itself
//! lives in the auth service, this module only drives the OAuth exchange
//! and the userinfo lookup.

use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope,
    TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::config;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Profile fields returned by the Google userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GoogleAuthError {
    #[error("invalid OAuth endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("code exchange failed: {0}")]
    Exchange(String),

    #[error("userinfo request failed: {0}")]
    Userinfo(String),
}

fn oauth_client() -> Result<BasicClient, GoogleAuthError> {
    let google = &config::config().google;

    let auth_url = AuthUrl::new(GOOGLE_AUTH_URL.to_string())
        .map_err(|e| GoogleAuthError::InvalidUrl(e.to_string()))?;
    let token_url = TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
        .map_err(|e| GoogleAuthError::InvalidUrl(e.to_string()))?;
    let redirect_url = RedirectUrl::new(google.callback_url.clone())
        .map_err(|e| GoogleAuthError::InvalidUrl(e.to_string()))?;

    Ok(BasicClient::new(
        ClientId::new(google.client_id.clone()),
        Some(ClientSecret::new(google.client_secret.clone())),
        auth_url,
        Some(token_url),
    )
    .set_redirect_uri(redirect_url))
}

/// Build the Google consent-screen URL the browser is redirected to
pub fn authorize_url() -> Result<String, GoogleAuthError> {
    let (url, _csrf) = oauth_client()?
        .authorize_url(CsrfToken::new_random)
        .add_scope(Scope::new("email".to_string()))
        .add_scope(Scope::new("profile".to_string()))
        .url();

    Ok(url.to_string())
}

/// Exchange the callback code for an access token and fetch the profile
pub async fn fetch_user(code: String) -> Result<GoogleUser, GoogleAuthError> {
    let token = oauth_client()?
        .exchange_code(AuthorizationCode::new(code))
        .request_async(async_http_client)
        .await
        .map_err(|e| GoogleAuthError::Exchange(e.to_string()))?;

    let client = reqwest::Client::new();
    let user = client
        .get(GOOGLE_USERINFO_URL)
        .bearer_auth(token.access_token().secret())
        .send()
        .await
        .map_err(|e| GoogleAuthError::Userinfo(e.to_string()))?
        .error_for_status()
        .map_err(|e| GoogleAuthError::Userinfo(e.to_string()))?
        .json::<GoogleUser>()
        .await
        .map_err(|e| GoogleAuthError::Userinfo(e.to_string()))?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_requests_email_and_profile() {
        let url = authorize_url().unwrap();
        assert!(url.starts_with(GOOGLE_AUTH_URL));
        assert!(url.contains("scope=email+profile"));
        assert!(url.contains("response_type=code"));
    }
}
