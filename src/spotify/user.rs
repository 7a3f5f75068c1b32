use reqwest::Client;

use crate::{config, types::CurrentUser};

/// Retrieves the authenticated user's profile.
///
/// Only the user id and market country are kept: the id owns created
/// playlists and the country scopes artist top-track lookups.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CurrentUser)` - The user's id and country
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_current_user(token: &str) -> Result<CurrentUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<CurrentUser>().await?;
    Ok(res)
}
