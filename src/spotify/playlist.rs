use reqwest::{Client, header};

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        PlaylistsPage,
    },
};

/// Retrieves one page of the user's playlists.
///
/// The first page is requested with a limit of 50; subsequent pages are
/// fetched through the absolute `next` URL returned by the API. The caller
/// loops until `next` is exhausted so name-collision checks see every
/// playlist, not just the first page.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `page_url` - `None` for the first page, or the previous page's `next`
///   URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistsPage)` - Playlist summaries and the next page URL, if any
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_user_playlists_page(
    token: &str,
    page_url: Option<&str>,
) -> Result<PlaylistsPage, reqwest::Error> {
    let api_url = match page_url {
        Some(url) => url.to_string(),
        None => format!(
            "{uri}/me/playlists?limit=50",
            uri = &config::spotify_apiurl()
        ),
    };

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<PlaylistsPage>().await?;
    Ok(res)
}

/// Creates a playlist for the user.
///
/// The request carries the final name, description and visibility flags.
/// Monthly replay playlists are always private and non-collaborative.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - The playlist owner's Spotify user id
/// * `request` - Name, description and visibility flags
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - The created playlist's id and metadata
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn create(
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<CreatePlaylistResponse>().await?;
    Ok(res)
}

/// Uploads a custom cover image for a playlist.
///
/// The request body is the raw base64-encoded JPEG string, sent with an
/// `image/jpeg` content type. Size validation happens before the call; this
/// function only ships the bytes.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - The playlist to attach the cover to
/// * `image_base64` - Base64-encoded JPEG payload
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(())` - The cover was accepted
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn upload_cover(
    token: &str,
    playlist_id: &str,
    image_base64: &str,
) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/images",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    client
        .put(&api_url)
        .bearer_auth(token)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(image_base64.to_string())
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Adds tracks to a playlist.
///
/// The API accepts at most 100 URIs per request; callers chunk larger lists
/// and invoke this once per chunk.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - The playlist to populate
/// * `uris` - Track URIs (`spotify:track:{id}`), at most 100
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTracksResponse)` - The playlist's new snapshot id
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let request = AddTracksRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<AddTracksResponse>().await?;
    Ok(res)
}
