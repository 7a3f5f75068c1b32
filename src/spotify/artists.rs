use reqwest::Client;

use crate::{
    config,
    types::{Artist, ArtistTopTracksResponse, FollowedArtistsResponse, Track},
};

/// Retrieves a page of followed artists from the Spotify Web API.
///
/// Fetches artists that the authenticated user follows using cursor-based
/// pagination. The caller loops until no `after` cursor is returned, so the
/// complete followed set is traversed.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of artists to return in this request (1-50)
/// * `after` - Optional cursor for pagination, specifying where to start the
///   next page
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok((Vec<Artist>, Option<String>))` - List of artists and optional next
///   cursor
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related
///   error
///
/// # Example
///
/// ```
/// let (artists, next_cursor) = get_followed_artists(token, 50, None).await?;
///
/// if let Some(cursor) = next_cursor {
///     let (more_artists, _) = get_followed_artists(token, 50, Some(cursor)).await?;
/// }
/// ```
pub async fn get_followed_artists(
    token: &str,
    limit: u64,
    after: Option<String>,
) -> Result<(Vec<Artist>, Option<String>), reqwest::Error> {
    let mut api_url = format!(
        "{uri}/me/following?type=artist&limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = limit
    );
    if let Some(after_val) = &after {
        api_url.push_str(&format!("&after={}", after_val));
    }

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<FollowedArtistsResponse>().await?;
    let next_after = res.artists.cursors.and_then(|c| c.after);

    Ok((res.artists.items, next_after))
}

/// Retrieves an artist's top tracks for a market.
///
/// The market is the current user's country; tracks unavailable there are
/// excluded by the API. The pipeline filters the result down to tracks whose
/// album release date falls in the selected month, which makes this the
/// new-release source for followed artists.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify ID of the artist
/// * `market` - ISO 3166-1 alpha-2 country code
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Track>)` - The artist's current top tracks in the market
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_artist_top_tracks(
    token: &str,
    artist_id: &str,
    market: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = market
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<ArtistTopTracksResponse>().await?;
    Ok(res.tracks)
}
