use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{config, types::Token};

#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: String,
    expires_in: u64,
}

impl TokenResponse {
    // Refresh responses may omit the refresh token, in which case the
    // previous one stays valid.
    fn into_token(self, previous_refresh_token: Option<String>) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self
                .refresh_token
                .or(previous_refresh_token)
                .unwrap_or_default(),
            scope: self.scope,
            expires_in: self.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Constructs the Spotify authorization URL the user's browser is redirected
/// to when logging in.
///
/// The URL carries the client id, the registered redirect URI and the
/// requested scope. Spotify redirects back to the `/callback` route with an
/// authorization code once the user has granted access.
pub fn authorize_url() -> String {
    format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope()
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization-code flow after the OAuth callback. The
/// client secret authenticates this service, so the exchange must only ever
/// run server-side.
///
/// # Arguments
///
/// * `code` - Authorization code received on the callback route
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token and
///   expiry metadata
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly. The exchange
/// happens immediately after receiving the callback.
pub async fn exchange_code(code: &str) -> Result<Token, reqwest::Error> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let token = res.json::<TokenResponse>().await?;
    Ok(token.into_token(None))
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so the session keeps
/// working without sending the user back through authorization. The
/// returned token carries a fresh expiry and the current timestamp as
/// `obtained_at`; when Spotify rotates the refresh token the new one is
/// used, otherwise the old one is kept.
///
/// # Arguments
///
/// * `refresh_token` - Valid refresh token obtained from a previous exchange
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - New token with fresh access token and updated expiration
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
pub async fn refresh_token(refresh_token: &str) -> Result<Token, reqwest::Error> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let token = res.json::<TokenResponse>().await?;
    Ok(token.into_token(Some(refresh_token.to_string())))
}
